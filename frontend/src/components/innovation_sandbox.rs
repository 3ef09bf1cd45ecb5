use std::f64::consts::PI;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::models::group_thousands;

#[derive(Clone, Debug, PartialEq)]
pub struct EnergySim {
    pub intensity: f64,
    pub output_kw: u32,
    pub battery: &'static str,
    pub grid: &'static str,
    pub bars: Vec<f64>,
}

/// Solar output for an hour of the day. The sun rises at 6 and peaks at noon.
pub fn simulate_energy(hour: u32) -> EnergySim {
    let angle = (hour as f64 - 6.0) / 12.0 * PI;
    let intensity = angle.sin().max(0.1).clamp(0.0, 1.0);
    let output_kw = (intensity * 120.0).round() as u32;
    let bars = (0..10)
        .map(|i| (intensity * 96.0 * (i as f64 / 10.0 * PI).cos()).max(6.0))
        .collect();
    EnergySim {
        intensity,
        output_kw,
        battery: if output_kw > 85 { "Charging" } else { "Idle" },
        grid: if output_kw < 20 { "Import" } else { "Sell" },
        bars,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterSim {
    pub captured_l: u32,
    pub reuse_l: u32,
    pub tank_level_px: f64,
}

pub fn simulate_water(rain: f64) -> WaterSim {
    let captured = (80_000.0 * rain * 0.65).round();
    WaterSim {
        captured_l: captured as u32,
        reuse_l: (captured * 0.6).round() as u32,
        tank_level_px: 40.0 + rain * 120.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirSim {
    pub cooling_reduction_pct: u32,
    pub air_changes_per_hour: f64,
    pub glare: &'static str,
    pub airflow_period_s: f64,
}

pub fn simulate_air(shading: f64, vent: f64) -> AirSim {
    AirSim {
        cooling_reduction_pct: ((shading * 0.6 + vent * 0.4) * 28.0).round() as u32,
        air_changes_per_hour: ((3.0 + vent * 3.0) * 10.0).round() / 10.0,
        glare: if shading > 0.6 { "Low" } else { "Med" },
        airflow_period_s: 2.0 - vent * 0.9,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AiSim {
    pub energy_saved_pct: u32,
    pub comfort_score_pct: u32,
    pub mode: &'static str,
    pub dial_deg: f64,
}

pub fn simulate_ai(occupancy: f64, comfort: f64) -> AiSim {
    AiSim {
        energy_saved_pct: ((1.0 - comfort) * 28.0 + (1.0 - occupancy) * 12.0).round() as u32,
        comfort_score_pct: (92.0 + comfort * 5.0).round() as u32,
        mode: if comfort > 0.55 { "Cozy" } else { "Eco" },
        dial_deg: -90.0 + comfort * 180.0,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Energy,
    Water,
    Air,
    Ai,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Energy, Tab::Water, Tab::Air, Tab::Ai];

    fn label(self) -> &'static str {
        match self {
            Tab::Energy => "Energy",
            Tab::Water => "Water",
            Tab::Air => "Air",
            Tab::Ai => "AI",
        }
    }

    fn hue(self) -> &'static str {
        match self {
            Tab::Energy => "#9B47B8",
            Tab::Water => "#64B847",
            Tab::Air => "#12A1FF",
            Tab::Ai => "#F0B429",
        }
    }
}

#[derive(Properties, PartialEq)]
struct SliderProps {
    label: AttrValue,
    value: f64,
    min: f64,
    max: f64,
    #[prop_or(0.01)]
    step: f64,
    on_change: Callback<f64>,
}

#[function_component(Slider)]
fn slider(props: &SliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                on_change.emit(value);
            }
        })
    };
    html! {
        <label class="sandbox-slider">
            <div class="sandbox-slider-label">{ props.label.clone() }</div>
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </label>
    }
}

fn outcomes(items: &[(&str, String)]) -> Html {
    html! {
        <ul class="sandbox-outcomes">
            { for items.iter().map(|(label, value)| html! {
                <li>
                    <div class="sandbox-outcome-label">{ *label }</div>
                    <div class="sandbox-outcome-value">{ value.clone() }</div>
                </li>
            }) }
        </ul>
    }
}

#[function_component(EnergyPanel)]
fn energy_panel() -> Html {
    let hour = use_state(|| 10.0_f64);
    let sim = simulate_energy(*hour as u32);
    let on_change = {
        let hour = hour.clone();
        Callback::from(move |v: f64| hour.set(v))
    };
    html! {
        <div class="sandbox-panel">
            <h3>{"PV + Demand Shifting"}</h3>
            <p class="sandbox-sub">{"Drag the sun; watch output respond."}</p>
            <div class="sandbox-sky">
                <div
                    class="sandbox-sun"
                    style={format!(
                        "left: {:.1}%; top: {:.1}%; box-shadow: 0 0 80px 20px rgba(255,200,60,{:.2});",
                        *hour / 24.0 * 100.0,
                        30.0 + (1.0 - sim.intensity) * 35.0,
                        0.25 + sim.intensity * 0.5
                    )}
                ></div>
                <div class="sandbox-bars">
                    { for sim.bars.iter().map(|h| html! {
                        <div class="sandbox-bar" style={format!("height: {:.0}px;", h)}></div>
                    }) }
                </div>
            </div>
            <Slider label="Hour" value={*hour} min={0.0} max={23.0} step={1.0} {on_change} />
            { outcomes(&[
                ("PV Output", format!("{} kW", sim.output_kw)),
                ("Battery", sim.battery.to_string()),
                ("Grid", sim.grid.to_string()),
            ]) }
        </div>
    }
}

#[function_component(WaterPanel)]
fn water_panel() -> Html {
    let rain = use_state(|| 0.4_f64);
    let sim = simulate_water(*rain);
    let on_change = {
        let rain = rain.clone();
        Callback::from(move |v: f64| rain.set(v))
    };
    html! {
        <div class="sandbox-panel">
            <h3>{"Rain + Greywater Loop"}</h3>
            <p class="sandbox-sub">{"Slide rainfall; storage & reuse update."}</p>
            <div class="sandbox-tank">
                <div class="sandbox-water" style={format!("height: {:.0}px;", sim.tank_level_px)}></div>
            </div>
            <Slider label="Rainfall" value={*rain} min={0.0} max={1.0} {on_change} />
            { outcomes(&[
                ("Captured", format!("{} L", group_thousands(u64::from(sim.captured_l)))),
                ("Reuse", format!("{} L", group_thousands(u64::from(sim.reuse_l)))),
                ("Irrigation", "Native only".to_string()),
            ]) }
        </div>
    }
}

#[function_component(AirPanel)]
fn air_panel() -> Html {
    let shading = use_state(|| 0.5_f64);
    let vent = use_state(|| 0.6_f64);
    let sim = simulate_air(*shading, *vent);
    let on_shading = {
        let shading = shading.clone();
        Callback::from(move |v: f64| shading.set(v))
    };
    let on_vent = {
        let vent = vent.clone();
        Callback::from(move |v: f64| vent.set(v))
    };
    html! {
        <div class="sandbox-panel">
            <h3>{"Passive Cooling"}</h3>
            <p class="sandbox-sub">{"Tune shading & ventilation."}</p>
            <div class="sandbox-airflow">
                { for (0..12).map(|i| html! {
                    <div
                        class="sandbox-stream"
                        style={format!("top: {}%; animation-duration: {:.2}s;", 20 + (i % 6) * 12, sim.airflow_period_s)}
                    ></div>
                }) }
            </div>
            <Slider label="Shading" value={*shading} min={0.0} max={1.0} on_change={on_shading} />
            <Slider label="Ventilation" value={*vent} min={0.0} max={1.0} on_change={on_vent} />
            { outcomes(&[
                ("Cooling load ↓", format!("{}%", sim.cooling_reduction_pct)),
                ("ACH", format!("{:.1}", sim.air_changes_per_hour)),
                ("Glare", sim.glare.to_string()),
            ]) }
        </div>
    }
}

#[function_component(AiPanel)]
fn ai_panel() -> Html {
    let occupancy = use_state(|| 0.5_f64);
    let comfort = use_state(|| 0.6_f64);
    let sim = simulate_ai(*occupancy, *comfort);
    let on_occupancy = {
        let occupancy = occupancy.clone();
        Callback::from(move |v: f64| occupancy.set(v))
    };
    let on_comfort = {
        let comfort = comfort.clone();
        Callback::from(move |v: f64| comfort.set(v))
    };
    html! {
        <div class="sandbox-panel">
            <h3>{"AI Building Brain"}</h3>
            <p class="sandbox-sub">{"Balance comfort vs energy with a dial."}</p>
            <div class="sandbox-dial">
                <div class="sandbox-needle" style={format!("transform: rotate({:.1}deg);", sim.dial_deg)}></div>
            </div>
            <Slider label="Comfort bias" value={*comfort} min={0.0} max={1.0} on_change={on_comfort} />
            <Slider label="Occupancy" value={*occupancy} min={0.0} max={1.0} on_change={on_occupancy} />
            { outcomes(&[
                ("Energy saved", format!("{}%", sim.energy_saved_pct)),
                ("Comfort score", format!("{}%", sim.comfort_score_pct)),
                ("Mode", sim.mode.to_string()),
            ]) }
        </div>
    }
}

fn key_outcomes(tab: Tab) -> (Vec<(&'static str, String)>, &'static str) {
    let items = |pairs: [(&'static str, &'static str); 3]| -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    };
    match tab {
        Tab::Energy => (
            items([("Annual surplus", "18–42%"), ("Peak shaving", "−35%"), ("Autonomy days", "3.2")]),
            "PV + thermal mass + demand shifting deliver net-positive energy.",
        ),
        Tab::Water => (
            items([("Reuse rate", "60–90%"), ("Harvest capacity", "80k L"), ("Irrigation cut", "−75%")]),
            "Greywater + rain harvesting + native planting close the loop.",
        ),
        Tab::Air => (
            items([("Passive hours", "68%"), ("ACH (natural)", "4.5"), ("Cooling load", "−28%")]),
            "Stack effect + night purge + shading cut mechanical loads.",
        ),
        Tab::Ai => (
            items([("Comfort score", "97%"), ("Energy saved", "−22%"), ("Anomaly alerts", "real-time")]),
            "AI tunes setpoints & schedules; learns per space & season.",
        ),
    }
}

#[function_component(InnovationSandbox)]
pub fn innovation_sandbox() -> Html {
    let tab = use_state(|| Tab::Energy);
    let (items, note) = key_outcomes(*tab);

    html! {
        <section class="sandbox">
            <header class="sandbox-header">
                <h2>{"Innovation & Research "}<span class="sandbox-dim">{"Sandbox"}</span></h2>
                <p>{"Touch the systems that make ArchiDius buildings self-sufficient."}</p>
            </header>
            <nav class="sandbox-tabs">
                { for Tab::ALL.iter().map(|t| {
                    let select = {
                        let tab = tab.clone();
                        let t = *t;
                        Callback::from(move |_: MouseEvent| tab.set(t))
                    };
                    let active = *tab == *t;
                    html! {
                        <button
                            class={classes!("sandbox-tab", active.then_some("active"))}
                            style={active.then(|| format!("border-color: {};", t.hue()))}
                            onclick={select}
                        >
                            { t.label() }
                        </button>
                    }
                }) }
            </nav>
            <div class="sandbox-body">
                {
                    match *tab {
                        Tab::Energy => html! { <EnergyPanel /> },
                        Tab::Water => html! { <WaterPanel /> },
                        Tab::Air => html! { <AirPanel /> },
                        Tab::Ai => html! { <AiPanel /> },
                    }
                }
                <div class="sandbox-metrics">
                    <h3>{"Key Outcomes"}</h3>
                    { outcomes(&items) }
                    <p class="sandbox-note">{ note }</p>
                </div>
            </div>
            <div class="sandbox-notes">
                { for [
                    ("Facade daylight study", "DA(300lx) → 62%"),
                    ("Roof water routing", "First-flush diverter v3"),
                    ("Heat-pump schedule", "COP window 09:00–14:30"),
                ].iter().map(|(title, meta)| html! {
                    <article class="sandbox-note-card">
                        <h4>{ *title }</h4>
                        <p>{ *meta }</p>
                    </article>
                }) }
            </div>
            <style>
                {r#"
                .sandbox { padding: 7rem 1.5rem; background: linear-gradient(135deg, #020617, #0f172a); color: #fff; }
                .sandbox-header { text-align: center; margin-bottom: 2.5rem; }
                .sandbox-header h2 { font-size: 2.75rem; font-weight: 700; }
                .sandbox-dim, .sandbox-sub, .sandbox-note { color: rgba(255,255,255,0.7); }
                .sandbox-tabs { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; max-width: 42rem; margin: 0 auto 2.5rem; }
                .sandbox-tab { padding: 0.75rem 1rem; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); color: #fff; cursor: pointer; }
                .sandbox-tab.active { background: rgba(255,255,255,0.12); }
                .sandbox-body { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2.5rem; max-width: 72rem; margin: 0 auto; }
                .sandbox-panel, .sandbox-metrics, .sandbox-note-card { border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.06); border-radius: 1.5rem; padding: 2rem; }
                .sandbox-sky, .sandbox-tank, .sandbox-airflow, .sandbox-dial { position: relative; height: 220px; margin: 1.5rem 0; border-radius: 1rem; overflow: hidden; background: rgba(0,0,0,0.25); }
                .sandbox-sun { position: absolute; width: 36px; height: 36px; border-radius: 9999px; background: #ffc83c; transform: translate(-50%, -50%); }
                .sandbox-bars { position: absolute; bottom: 0; left: 0; right: 0; display: flex; align-items: flex-end; gap: 6px; padding: 0 1rem; }
                .sandbox-bar { flex: 1; background: rgba(155,71,184,0.7); border-radius: 4px 4px 0 0; }
                .sandbox-water { position: absolute; bottom: 0; left: 0; right: 0; background: rgba(100,184,71,0.6); transition: height 0.3s; }
                .sandbox-stream { position: absolute; left: -10%; right: 60%; height: 2px; background: rgba(18,161,255,0.6); animation: stream-flow linear infinite; }
                @keyframes stream-flow { from { transform: translateX(0); opacity: 0; } 50% { opacity: 1; } to { transform: translateX(140%); opacity: 0; } }
                .sandbox-needle { position: absolute; left: 50%; bottom: 20px; width: 4px; height: 120px; margin-left: -2px; background: #f0b429; transform-origin: bottom center; transition: transform 0.3s; }
                .sandbox-slider { display: block; margin-top: 1rem; }
                .sandbox-slider input { width: 100%; }
                .sandbox-slider-label, .sandbox-outcome-label { font-size: 0.8rem; color: rgba(255,255,255,0.6); }
                .sandbox-outcomes { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; list-style: none; padding: 0; margin-top: 1.5rem; }
                .sandbox-outcomes li { border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.08); border-radius: 0.75rem; padding: 1rem; text-align: center; }
                .sandbox-outcome-value { font-size: 1.25rem; font-weight: 600; margin-top: 0.25rem; }
                .sandbox-notes { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; max-width: 72rem; margin: 4rem auto 0; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_peaks_at_noon_and_floors_at_night() {
        let noon = simulate_energy(12);
        assert_eq!(noon.output_kw, 120);
        assert_eq!(noon.battery, "Charging");
        assert_eq!(noon.grid, "Sell");

        let night = simulate_energy(2);
        assert_eq!(night.intensity, 0.1);
        assert_eq!(night.output_kw, 12);
        assert_eq!(night.battery, "Idle");
        assert_eq!(night.grid, "Import");
    }

    #[test]
    fn energy_bars_never_drop_below_six() {
        let sim = simulate_energy(10);
        assert_eq!(sim.bars.len(), 10);
        assert!(sim.bars.iter().all(|h| *h >= 6.0));
        assert!((sim.bars[0] - sim.intensity * 96.0).abs() < 1e-9);
    }

    #[test]
    fn water_capture_and_reuse() {
        let sim = simulate_water(0.4);
        assert_eq!(sim.captured_l, 20_800);
        assert_eq!(sim.reuse_l, 12_480);
        assert!((sim.tank_level_px - 88.0).abs() < 1e-9);
        assert_eq!(simulate_water(0.0).captured_l, 0);
    }

    #[test]
    fn air_defaults() {
        let sim = simulate_air(0.5, 0.6);
        assert_eq!(sim.cooling_reduction_pct, 15);
        assert_eq!(sim.air_changes_per_hour, 4.8);
        assert_eq!(sim.glare, "Med");
        assert_eq!(simulate_air(0.7, 0.0).glare, "Low");
    }

    #[test]
    fn ai_defaults_and_extremes() {
        let sim = simulate_ai(0.5, 0.6);
        assert_eq!(sim.energy_saved_pct, 17);
        assert_eq!(sim.comfort_score_pct, 95);
        assert_eq!(sim.mode, "Cozy");
        assert!((sim.dial_deg - 18.0).abs() < 1e-9);

        let eco = simulate_ai(0.0, 0.0);
        assert_eq!(eco.energy_saved_pct, 40);
        assert_eq!(eco.mode, "Eco");
        assert_eq!(eco.dial_deg, -90.0);
    }
}
