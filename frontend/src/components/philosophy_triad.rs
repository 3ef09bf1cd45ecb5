use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Principle {
    SelfSufficient,
    Excellence,
    FutureProof,
}

impl Principle {
    pub const ALL: [Principle; 3] = [
        Principle::SelfSufficient,
        Principle::Excellence,
        Principle::FutureProof,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Principle::SelfSufficient => "Self-Sufficient",
            Principle::Excellence => "Excellence",
            Principle::FutureProof => "Future-Proof",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Principle::SelfSufficient => "Self-Sufficient Living",
            Principle::Excellence => "Universal Excellence",
            Principle::FutureProof => "Future-Proof Design",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Principle::SelfSufficient => {
                "Energy positive shells, closed-loop water, and micro-ecologies that give more than they take."
            }
            Principle::Excellence => {
                "Clarity in plan, generosity in section, and craft that travels across climates and cultures."
            }
            Principle::FutureProof => {
                "Adaptable grids, repairable details, and systems that evolve without waste."
            }
        }
    }

    pub fn examples(self) -> [(&'static str, &'static str); 3] {
        match self {
            Principle::SelfSufficient => [
                ("Annual Surplus Energy", "18–42%"),
                ("Rainwater Reused", "60–90%"),
                ("Operable Days (No HVAC)", "120+"),
            ],
            Principle::Excellence => [
                ("Comfort Range Met", "97%"),
                ("Change Orders", "−35%"),
                ("Local Fabrication", "80%"),
            ],
            Principle::FutureProof => [
                ("Modular Swap Time", "< 2h"),
                ("Lifecycle Extension", "+25 yrs"),
                ("Recyclable Mass", "70%"),
            ],
        }
    }

    /// Gradient stops for the selected node.
    fn accent(self) -> (&'static str, &'static str) {
        match self {
            Principle::SelfSufficient => ("#64B847", "#9B47B8"),
            Principle::Excellence => ("#9B47B8", "#64B847"),
            Principle::FutureProof => ("#64B847", "#64B847"),
        }
    }

    /// Node position in the 800x420 triangle viewbox.
    pub fn position(self) -> (u32, u32) {
        match self {
            Principle::SelfSufficient => (150, 350),
            Principle::Excellence => (400, 80),
            Principle::FutureProof => (650, 350),
        }
    }

    /// The triangle side drawn in colour while this node is selected.
    pub fn edge_path(self) -> &'static str {
        match self {
            Principle::SelfSufficient => "M400,80 L150,350",
            Principle::Excellence => "M400,80 L650,350",
            Principle::FutureProof => "M150,350 L650,350",
        }
    }
}

#[function_component(PhilosophyTriad)]
pub fn philosophy_triad() -> Html {
    let active = use_state(|| Principle::SelfSufficient);
    let (from, to) = active.accent();

    html! {
        <section class="triad">
            <div class="triad-header">
                <h2>{"Our Philosophy, Made Visible"}</h2>
                <p>{"Explore the triad that shapes every decision we make."}</p>
            </div>
            <div class="triad-grid">
                <div class="triad-stage">
                    <svg class="triad-lines" viewBox="0 0 800 420" preserveAspectRatio="xMidYMid meet" aria-hidden="true">
                        <defs>
                            <linearGradient id="triad-grad" x1="0%" y1="0%" x2="100%" y2="0%">
                                <stop offset="0%" stop-color="#9B47B8" />
                                <stop offset="100%" stop-color="#64B847" />
                            </linearGradient>
                        </defs>
                        <path d="M150,350 L400,80 L650,350 Z" fill="none" stroke="rgba(0,0,0,0.15)" stroke-width="1.5" />
                        // keyed so the draw animation restarts on every selection
                        <path
                            key={active.label()}
                            class="triad-edge"
                            d={active.edge_path()}
                            fill="none"
                            stroke="url(#triad-grad)"
                            stroke-width="3"
                        />
                    </svg>
                    { for Principle::ALL.iter().map(|p| {
                        let p = *p;
                        let selected = *active == p;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(p))
                        };
                        let (x, y) = p.position();
                        let (a, b) = p.accent();
                        let background = if selected {
                            format!("linear-gradient(135deg, {}, {})", a, b)
                        } else {
                            "linear-gradient(135deg, rgba(255,255,255,0.85), rgba(255,255,255,0.65))".to_string()
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("triad-node", selected.then_some("selected"))}
                                style={format!("left: {:.2}%; top: {:.2}%;", x as f64 / 8.0, y as f64 / 4.2)}
                                {onclick}
                            >
                                <div class="triad-node-face" style={format!("background: {};", background)}>
                                    { &p.label()[..1] }
                                </div>
                                <div class="triad-node-label">{ p.label() }</div>
                            </button>
                        }
                    }) }
                    <div class="triad-hint">{"Click a node to explore the principle"}</div>
                </div>
                <div class="triad-detail" key={active.label()}>
                    <div class="triad-detail-head">
                        <div class="triad-badge" style={format!("background: linear-gradient(135deg, {}, {});", from, to)}></div>
                        <h3>{ active.title() }</h3>
                    </div>
                    <p>{ active.blurb() }</p>
                    <div class="triad-examples">
                        { for active.examples().iter().map(|(label, value)| html! {
                            <div class="triad-example">
                                <div class="triad-example-label">{ *label }</div>
                                <div class="triad-example-value">{ *value }</div>
                            </div>
                        }) }
                    </div>
                    <div class="triad-footnote">{"Metrics shown are indicative ranges from comparable projects."}</div>
                </div>
            </div>
            <style>
                {r#"
                .triad { position: relative; padding: 7rem 1.5rem; background: #f8fafc; color: #2d2d2d; }
                .triad-header { text-align: center; margin-bottom: 3.5rem; }
                .triad-header h2 { font-size: 2.75rem; font-weight: 700; }
                .triad-header p { margin-top: 0.75rem; color: rgba(45,45,45,0.7); }
                .triad-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(340px, 1fr)); gap: 2.5rem; align-items: center; max-width: 72rem; margin: 0 auto; }
                .triad-stage { position: relative; height: 420px; }
                .triad-lines { position: absolute; inset: 0; width: 100%; height: 100%; }
                .triad-edge { stroke-dasharray: 400; stroke-dashoffset: 400; animation: triad-draw 0.8s forwards; }
                @keyframes triad-draw { to { stroke-dashoffset: 0; } }
                .triad-node { position: absolute; transform: translate(-50%, -50%); background: none; border: none; cursor: pointer; transition: transform 0.2s; }
                .triad-node:hover { transform: translate(-50%, -50%) scale(1.06); }
                .triad-node-face { display: grid; place-items: center; width: 5rem; height: 5rem; border-radius: 1rem; border: 1px solid rgba(0,0,0,0.1); box-shadow: 0 10px 25px rgba(0,0,0,0.1); font-size: 1.5rem; font-weight: 700; color: rgba(45,45,45,0.7); }
                .triad-node.selected .triad-node-face { color: #fff; }
                .triad-node-label { margin-top: 0.5rem; text-align: center; font-size: 0.875rem; color: rgba(45,45,45,0.75); }
                .triad-hint { position: absolute; bottom: -2rem; left: 50%; transform: translateX(-50%); font-size: 0.875rem; color: rgba(45,45,45,0.5); }
                .triad-detail { border: 1px solid rgba(0,0,0,0.1); background: #fff; border-radius: 1.5rem; padding: 2rem; box-shadow: 0 20px 60px -30px rgba(0,0,0,0.25); animation: triad-fade 0.35s ease-out; }
                @keyframes triad-fade { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: none; } }
                .triad-detail-head { display: flex; align-items: center; gap: 1rem; }
                .triad-badge { width: 3rem; height: 3rem; border-radius: 0.75rem; }
                .triad-detail h3 { font-size: 1.5rem; font-weight: 700; }
                .triad-detail p { margin-top: 1rem; line-height: 1.7; color: rgba(45,45,45,0.75); }
                .triad-examples { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 1.5rem; }
                .triad-example { border: 1px solid rgba(0,0,0,0.1); border-radius: 0.75rem; padding: 1rem; text-align: center; }
                .triad-example-label { font-size: 0.875rem; color: rgba(45,45,45,0.6); }
                .triad-example-value { margin-top: 0.25rem; font-size: 1.25rem; }
                .triad-footnote { margin-top: 1.5rem; font-size: 0.75rem; color: rgba(45,45,45,0.5); }
                "#}
            </style>
        </section>
    }
}
