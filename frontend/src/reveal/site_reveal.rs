use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::reveal::particles::{EmberParams, ParticleField, ParticleParams, EMBER_COUNT, PARTICLE_COUNT};
use crate::reveal::sequencer::{RevealSequencer, RevealTimings};
use crate::reveal::stage::{AnimationStage, RevealEvent};
use crate::reveal::storage::SessionRevealStore;
use crate::reveal::typewriter::Typewriter;

const TITLE: &str = "ArchiDius";
const SUBTITLE: &str = "The Valor of Space";
const MAX_VIDEO_DIM: f64 = 0.92;

#[derive(Properties, PartialEq)]
pub struct SiteRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(AttrValue::Static("/videos/herov.mp4"))]
    pub video_src: AttrValue,
    #[prop_or_default]
    pub video_poster: Option<AttrValue>,
    #[prop_or(0.55)]
    pub video_dim: f64,
}

fn particle_style(p: &ParticleParams) -> String {
    let (x, y) = p.target();
    let filter = if p.blur > 0.0 {
        format!("blur({:.2}px) drop-shadow(0 0 2px rgba(255,255,255,0.35))", p.blur)
    } else {
        "drop-shadow(0 0 1px rgba(255,255,255,0.22))".to_string()
    };
    format!(
        "--tx: {:.1}px; --ty: {:.1}px; --rot: {:.1}deg; --peak: {:.2}; width: {:.2}px; height: {:.2}px; \
         animation-duration: {:.2}s; animation-delay: {:.2}s; filter: {};",
        x, y, p.rotation, p.peak_opacity, p.size, p.size, p.travel_duration, p.start_delay, filter
    )
}

fn ember_style(e: &EmberParams) -> String {
    format!(
        "--ex: {:.1}px; --ey: {:.1}px; --peak: {:.2}; width: {:.2}px; height: {:.2}px; \
         animation-duration: {:.2}s; animation-delay: {:.2}s;",
        e.offset_x, e.offset_y, e.opacity, e.size, e.size, e.duration, e.delay
    )
}

/// Plays the intro once per browser session. The routed content stays mounted
/// underneath the overlay and fades in on reveal.
#[function_component(SiteReveal)]
pub fn site_reveal(props: &SiteRevealProps) -> Html {
    let sequencer = use_mut_ref(|| RevealSequencer::new(SessionRevealStore, RevealTimings::default()));
    let stage = {
        let sequencer = sequencer.clone();
        use_state(move || sequencer.borrow().stage())
    };
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let field = use_memo(|_| ParticleField::new(PARTICLE_COUNT, EMBER_COUNT), ());

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    // dropping a Timeout clears it
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let dispatch = {
        let sequencer = sequencer.clone();
        let stage = stage.setter();
        Callback::from(move |event: RevealEvent| {
            let next = sequencer.borrow_mut().dispatch(event);
            stage.set(next);
        })
    };

    let on_activate = {
        let sequencer = sequencer.clone();
        let stage = stage.setter();
        let timers = timers.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let scheduled = sequencer.borrow_mut().activate();
            if scheduled.is_empty() {
                return;
            }
            stage.set(sequencer.borrow().stage());
            let mut timers = timers.borrow_mut();
            for item in scheduled {
                let dispatch = dispatch.clone();
                timers.push(Timeout::new(item.delay_ms, move || dispatch.emit(item.event)));
            }
        })
    };

    let on_typing_done = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(RevealEvent::TypingFinished))
    };

    let current = *stage;
    let timings = sequencer.borrow().timings();

    if current == AnimationStage::Revealed && timers.borrow().is_empty() {
        // fast path: nothing was ever scheduled in this mount
        return html! { <>{ for props.children.iter() }</> };
    }

    let dim = props.video_dim.clamp(0.0, MAX_VIDEO_DIM);
    let content_class = if current == AnimationStage::Revealed {
        "reveal-content reveal-content-shown"
    } else {
        "reveal-content"
    };

    html! {
        <>
            if current.overlay_visible() {
                <div class="reveal-overlay">
                    <div class="reveal-video">
                        <video
                            src={props.video_src.clone()}
                            poster={props.video_poster.clone()}
                            autoplay={true}
                            muted={true}
                            loop={true}
                            playsinline={true}
                        />
                        <div class="reveal-dim" style={format!("background-color: rgba(0,0,0,{:.2});", dim)}></div>
                    </div>

                    if current.embers_visible() {
                        <div class="reveal-embers">
                            { for field.embers.iter().map(|e| html! {
                                <span class="reveal-ember" style={ember_style(e)}></span>
                            }) }
                        </div>
                    }

                    if current.burst_visible() {
                        <>
                            <div class="reveal-flash"></div>
                            <div class="reveal-glow"></div>
                            <div class="reveal-ring"></div>
                            { for field.particles.iter().map(|p| html! {
                                <span
                                    class={classes!("reveal-dust", p.soft_core.then_some("reveal-dust-soft"))}
                                    style={particle_style(p)}
                                ></span>
                            }) }
                        </>
                    }

                    if current.typewriter_visible() {
                        <div class="reveal-type">
                            <Typewriter
                                title={TITLE}
                                subtitle={SUBTITLE}
                                total_ms={timings.typing_total_ms}
                                gap_ms={timings.line_gap_ms}
                                on_done={on_typing_done}
                            />
                        </div>
                    }

                    if current.prompt_visible() {
                        <div class="reveal-prompt">
                            <img src="/images/nodot.png" alt="" aria-hidden="true" class="reveal-mark" />
                            <div class="reveal-dot-wrap">
                                <button class="reveal-dot" onclick={on_activate} aria-label="Reveal ArchiDius">
                                    <span class="sr-only">{"Reveal ArchiDius"}</span>
                                </button>
                                <svg class="reveal-cursor" width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                                    <path
                                        d="M4 3 L17 14 L12.4 14 L14.6 20.5 L12.7 21.2 L10.4 14.9 L7.2 17.6 Z"
                                        fill="transparent"
                                        stroke="white"
                                        stroke-opacity="0.9"
                                        stroke-width="1.2"
                                        stroke-linejoin="round"
                                    />
                                </svg>
                            </div>
                        </div>
                    }
                </div>
            }

            <div class={content_class}>
                { for props.children.iter() }
            </div>

            <style>
                {r#"
                .reveal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0a0a0a;
                    overflow: hidden;
                }
                .reveal-video {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                }
                .reveal-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .reveal-dim {
                    position: absolute;
                    inset: 0;
                }
                .reveal-embers {
                    position: absolute;
                    inset: 0;
                }
                .reveal-ember,
                .reveal-dust {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    border-radius: 9999px;
                    opacity: 0;
                    will-change: transform, opacity;
                }
                .reveal-ember {
                    background: radial-gradient(closest-side, rgba(255,255,255,0.9), rgba(255,255,255,0) 80%);
                    filter: blur(0.7px);
                    animation-name: ember-drift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }
                @keyframes ember-drift {
                    0% { transform: translate(0, 0) scale(0.85); opacity: 0; }
                    33% { transform: translate(var(--ex), var(--ey)) scale(1); opacity: var(--peak); }
                    66% { transform: translate(calc(var(--ex) * 0.6), calc(var(--ey) * 0.6)) scale(1); opacity: calc(var(--peak) * 0.6); }
                    100% { transform: translate(0, 0) scale(0.85); opacity: 0; }
                }
                .reveal-dust {
                    background: rgba(255,255,255,0.9);
                    animation-name: dust-burst;
                    animation-timing-function: ease-out;
                    animation-fill-mode: forwards;
                }
                .reveal-dust-soft {
                    background: radial-gradient(closest-side, rgba(255,255,255,0.95), rgba(255,255,255,0.12) 90%, rgba(255,255,255,0) 100%);
                }
                @keyframes dust-burst {
                    0% { transform: translate(0, 0) scale(0.55) rotate(0deg); opacity: 0; }
                    30% { opacity: var(--peak); transform: translate(calc(var(--tx) * 0.3), calc(var(--ty) * 0.3)) scale(1) rotate(calc(var(--rot) * 0.3)); }
                    70% { opacity: calc(var(--peak) * 0.35); transform: translate(calc(var(--tx) * 0.7), calc(var(--ty) * 0.7)) scale(0.9) rotate(calc(var(--rot) * 0.7)); }
                    100% { transform: translate(var(--tx), var(--ty)) scale(0.65) rotate(var(--rot)); opacity: 0; }
                }
                .reveal-flash,
                .reveal-glow,
                .reveal-ring {
                    position: absolute;
                    border-radius: 9999px;
                    opacity: 0;
                    animation-timing-function: cubic-bezier(0.16, 1, 0.3, 1);
                    animation-fill-mode: forwards;
                }
                .reveal-flash {
                    background: radial-gradient(circle, rgba(250,204,21,0.42) 0%, rgba(250,204,21,0.18) 35%, rgba(250,204,21,0) 70%);
                    filter: blur(18px);
                    animation-name: flash-grow;
                    animation-duration: 0.85s;
                }
                .reveal-glow {
                    background: radial-gradient(circle, rgba(255,255,255,0.12) 0%, rgba(255,255,255,0.06) 30%, rgba(255,255,255,0) 70%);
                    filter: blur(22px);
                    animation-name: glow-grow;
                    animation-duration: 1.35s;
                }
                .reveal-ring {
                    border: 1px solid rgba(255,255,255,0.22);
                    animation-name: ring-grow;
                    animation-duration: 1.1s;
                }
                @keyframes flash-grow {
                    0% { width: 12px; height: 12px; opacity: 0; }
                    40% { opacity: 0.55; }
                    100% { width: 60vmax; height: 60vmax; opacity: 0; }
                }
                @keyframes glow-grow {
                    0% { width: 10px; height: 10px; opacity: 0; }
                    40% { opacity: 0.6; }
                    100% { width: 145vmax; height: 145vmax; opacity: 0; }
                }
                @keyframes ring-grow {
                    0% { width: 10px; height: 10px; opacity: 0; }
                    40% { opacity: 0.5; }
                    100% { width: 185vmax; height: 185vmax; opacity: 0; }
                }
                .reveal-type {
                    position: absolute;
                    z-index: 10;
                    text-align: center;
                    animation: type-enter 0.8s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes type-enter {
                    from { opacity: 0; transform: translateY(16px) scale(0.94); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .typewriter {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .typewriter-line {
                    display: flex;
                    align-items: center;
                }
                .typewriter-title {
                    font-size: 4.5rem;
                    font-weight: 600;
                    color: #fff;
                    letter-spacing: -0.02em;
                }
                .typewriter-subtitle {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: rgba(255,255,255,0.7);
                    margin-top: 0.75rem;
                    letter-spacing: 0.05em;
                }
                .typewriter-cursor {
                    display: inline-block;
                    width: 1.5px;
                    height: 1.1em;
                    margin-left: 0.25rem;
                    background: rgba(255,255,255,0.9);
                    border-radius: 2px;
                    animation: cursor-blink 0.9s ease-in-out infinite;
                }
                .typewriter-cursor-lg {
                    height: 1.4em;
                }
                @keyframes cursor-blink {
                    0%, 100% { opacity: 0; }
                    50% { opacity: 1; }
                }
                .reveal-prompt {
                    position: relative;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    transform: translateY(28px);
                }
                .reveal-mark {
                    width: 200px;
                    margin-bottom: 12px;
                    pointer-events: none;
                    user-select: none;
                    animation: type-enter 0.6s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                .reveal-dot-wrap {
                    position: relative;
                }
                .reveal-dot {
                    width: 10px;
                    height: 10px;
                    padding: 0;
                    border-radius: 9999px;
                    background: #facc15;
                    border: 1px solid rgba(253,224,71,0.6);
                    cursor: pointer;
                    transition: transform 0.3s;
                    animation: dot-pulse 3.2s ease-in-out infinite;
                }
                .reveal-dot:hover {
                    transform: scale(2);
                }
                .reveal-dot:active {
                    transform: scale(0.75);
                }
                @keyframes dot-pulse {
                    0%, 100% { box-shadow: 0 0 34px rgba(250,204,21,0.5), 0 0 68px rgba(250,204,21,0.28); }
                    50% { box-shadow: 0 0 54px rgba(250,204,21,0.6), 0 0 110px rgba(250,204,21,0.34); }
                }
                .reveal-cursor {
                    position: absolute;
                    left: 50%;
                    top: calc(100% + 8px);
                    transform: translateX(-50%);
                    filter: drop-shadow(0 0 4px rgba(255,255,255,0.35));
                    animation: cursor-bob 1.4s ease-in-out infinite;
                }
                @keyframes cursor-bob {
                    0%, 100% { opacity: 1; margin-top: 0; }
                    50% { opacity: 0.9; margin-top: 1px; }
                }
                .reveal-content {
                    opacity: 0;
                    transform: scale(0.92);
                    transition: opacity 0.85s cubic-bezier(0.16, 1, 0.3, 1), transform 0.85s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .reveal-content-shown {
                    opacity: 1;
                    transform: scale(1);
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @media (min-width: 768px) {
                    .reveal-mark { width: 280px; }
                }
                "#}
            </style>
        </>
    }
}
