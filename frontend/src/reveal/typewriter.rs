use std::cell::Cell;
use std::rc::Rc;
use futures::future::abortable;
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

const MIN_TYPING_BUDGET_MS: u32 = 800;
const MIN_CHAR_INTERVAL_MS: u32 = 24;

/// Delay between two revealed characters so both lines fit the budget.
pub fn char_interval_ms(total_chars: usize, total_ms: u32, gap_ms: u32) -> u32 {
    let budget = total_ms.saturating_sub(gap_ms).max(MIN_TYPING_BUDGET_MS);
    let chars = u32::try_from(total_chars.max(1)).unwrap_or(u32::MAX);
    (budget / chars).max(MIN_CHAR_INTERVAL_MS)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    pub title: String,
    pub subtitle: String,
    pub done: bool,
}

/// Shared switch that silences a driver once its owner is gone.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Call `advance` again after this many milliseconds.
    Wait(u32),
    Finished,
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Title,
    Gap,
    Subtitle,
    Done,
}

/// Reveals a title and a subtitle one character at a time. The driver only computes
/// what happens next; whoever owns it decides how to wait.
pub struct TypewriterDriver {
    title: Vec<char>,
    subtitle: Vec<char>,
    interval_ms: u32,
    gap_ms: u32,
    phase: Phase,
    typed: usize,
    state: TypewriterState,
    on_update: Box<dyn Fn(&TypewriterState)>,
    on_done: Option<Box<dyn FnOnce()>>,
    token: CancelToken,
}

impl TypewriterDriver {
    pub fn new(title: &str, subtitle: &str, total_ms: u32, gap_ms: u32, token: CancelToken) -> Self {
        let title: Vec<char> = title.chars().collect();
        let subtitle: Vec<char> = subtitle.chars().collect();
        let interval_ms = char_interval_ms(title.len() + subtitle.len(), total_ms, gap_ms);
        Self {
            title,
            subtitle,
            interval_ms,
            gap_ms,
            phase: Phase::Title,
            typed: 0,
            state: TypewriterState::default(),
            on_update: Box::new(|_| {}),
            on_done: None,
            token,
        }
    }

    pub fn on_update(mut self, f: impl Fn(&TypewriterState) + 'static) -> Self {
        self.on_update = Box::new(f);
        self
    }

    pub fn on_done(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn start(&mut self) -> Tick {
        if self.token.is_cancelled() {
            return Tick::Halted;
        }
        self.phase = Phase::Title;
        self.typed = 0;
        if self.title.is_empty() {
            self.phase = Phase::Gap;
            Tick::Wait(self.gap_ms)
        } else {
            Tick::Wait(self.interval_ms)
        }
    }

    pub fn advance(&mut self) -> Tick {
        if self.token.is_cancelled() {
            return Tick::Halted;
        }
        match self.phase {
            Phase::Title => {
                self.typed += 1;
                self.state.title = self.title[..self.typed].iter().collect();
                (self.on_update)(&self.state);
                if self.typed >= self.title.len() {
                    self.phase = Phase::Gap;
                    Tick::Wait(self.gap_ms)
                } else {
                    Tick::Wait(self.interval_ms)
                }
            }
            Phase::Gap => {
                self.phase = Phase::Subtitle;
                self.typed = 0;
                if self.subtitle.is_empty() {
                    self.finish()
                } else {
                    Tick::Wait(self.interval_ms)
                }
            }
            Phase::Subtitle => {
                self.typed += 1;
                self.state.subtitle = self.subtitle[..self.typed].iter().collect();
                (self.on_update)(&self.state);
                if self.typed >= self.subtitle.len() {
                    self.finish()
                } else {
                    Tick::Wait(self.interval_ms)
                }
            }
            Phase::Done => Tick::Halted,
        }
    }

    fn finish(&mut self) -> Tick {
        self.phase = Phase::Done;
        self.state.done = true;
        (self.on_update)(&self.state);
        if let Some(on_done) = self.on_done.take() {
            on_done();
        }
        Tick::Finished
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or(5000)]
    pub total_ms: u32,
    #[prop_or(200)]
    pub gap_ms: u32,
    #[prop_or_default]
    pub on_done: Callback<()>,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let display = use_state(TypewriterState::default);

    {
        let display = display.clone();
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |(title, subtitle, total_ms, gap_ms)| {
                let token = CancelToken::default();
                let mut driver = TypewriterDriver::new(title, subtitle, *total_ms, *gap_ms, token.clone())
                    .on_update(move |state| display.set(state.clone()))
                    .on_done(move || on_done.emit(()));

                let (task, handle) = abortable(async move {
                    let mut tick = driver.start();
                    while let Tick::Wait(ms) = tick {
                        TimeoutFuture::new(ms).await;
                        tick = driver.advance();
                    }
                });
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = task.await;
                });

                move || {
                    token.cancel();
                    handle.abort();
                }
            },
            (props.title.clone(), props.subtitle.clone(), props.total_ms, props.gap_ms),
        );
    }

    let title_cursor = !display.done || display.subtitle.is_empty();

    html! {
        <div class="typewriter">
            <div class="typewriter-line">
                <span class="typewriter-title">{ display.title.clone() }</span>
                if title_cursor {
                    <span class="typewriter-cursor typewriter-cursor-lg"></span>
                }
            </div>
            <div class="typewriter-line">
                <span class="typewriter-subtitle">{ display.subtitle.clone() }</span>
                if !display.done {
                    <span class="typewriter-cursor"></span>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Seen {
        Update(TypewriterState),
        Done,
    }

    struct Run {
        seen: Rc<RefCell<Vec<Seen>>>,
        elapsed_ms: u32,
        finished: u32,
    }

    fn driver(title: &str, subtitle: &str, token: CancelToken) -> (TypewriterDriver, Rc<RefCell<Vec<Seen>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let updates = seen.clone();
        let done = seen.clone();
        let driver = TypewriterDriver::new(title, subtitle, 5000, 200, token)
            .on_update(move |state| updates.borrow_mut().push(Seen::Update(state.clone())))
            .on_done(move || done.borrow_mut().push(Seen::Done));
        (driver, seen)
    }

    fn run_to_end(title: &str, subtitle: &str) -> Run {
        let (mut driver, seen) = driver(title, subtitle, CancelToken::default());
        let mut elapsed_ms = 0;
        let mut finished = 0;
        let mut tick = driver.start();
        loop {
            match tick {
                Tick::Wait(ms) => {
                    elapsed_ms += ms;
                    tick = driver.advance();
                }
                Tick::Finished => {
                    finished += 1;
                    // polling past the end must not finish twice
                    tick = driver.advance();
                    assert_eq!(tick, Tick::Halted);
                    break;
                }
                Tick::Halted => break,
            }
        }
        Run { seen, elapsed_ms, finished }
    }

    fn done_count(seen: &[Seen]) -> usize {
        seen.iter().filter(|s| **s == Seen::Done).count()
    }

    #[test]
    fn interval_fits_budget_and_respects_floors() {
        assert_eq!(char_interval_ms(27, 5000, 200), 177);
        assert_eq!(char_interval_ms(0, 5000, 200), 4800);
        assert_eq!(char_interval_ms(10, 500, 200), 80);
        assert_eq!(char_interval_ms(10, 100, 500), 80);
        assert_eq!(char_interval_ms(10_000, 5000, 200), 24);
    }

    #[test]
    fn completes_exactly_once_after_both_lines() {
        let run = run_to_end("ArchiDius", "The Valor of Space");
        let seen = run.seen.borrow();
        assert_eq!(run.finished, 1);
        assert_eq!(done_count(&seen), 1);
        assert_eq!(seen.last(), Some(&Seen::Done));
        assert_eq!(
            seen[seen.len() - 2],
            Seen::Update(TypewriterState {
                title: "ArchiDius".into(),
                subtitle: "The Valor of Space".into(),
                done: true,
            })
        );
    }

    #[test]
    fn title_finishes_before_subtitle_starts() {
        let run = run_to_end("Arch", "Valor");
        let seen = run.seen.borrow();
        let mut title_complete = false;
        for entry in seen.iter() {
            if let Seen::Update(state) = entry {
                if !state.subtitle.is_empty() {
                    assert!(title_complete, "subtitle began early: {:?}", state);
                }
                if state.title == "Arch" {
                    title_complete = true;
                }
                assert!("Arch".starts_with(state.title.as_str()));
                assert!("Valor".starts_with(state.subtitle.as_str()));
            }
        }
    }

    #[test]
    fn elapsed_time_is_chars_plus_gap() {
        let run = run_to_end("ArchiDius", "The Valor of Space");
        let interval = char_interval_ms(27, 5000, 200);
        // one interval per character, plus the pause between lines
        assert_eq!(run.elapsed_ms, interval * 27 + 200);
    }

    #[test]
    fn unicode_counts_characters_not_bytes() {
        let run = run_to_end("Ålborg", "空間");
        let seen = run.seen.borrow();
        let updates = seen.iter().filter(|s| matches!(s, Seen::Update(_))).count();
        // six title chars, two subtitle chars, one final done update
        assert_eq!(updates, 9);
    }

    #[test]
    fn empty_lines_take_no_ticks() {
        for (title, subtitle) in [("", ""), ("", "Valor"), ("Arch", "")] {
            let run = run_to_end(title, subtitle);
            assert_eq!(run.finished, 1, "{:?}/{:?}", title, subtitle);
            assert_eq!(done_count(&run.seen.borrow()), 1);
            let interval = char_interval_ms(title.chars().count() + subtitle.chars().count(), 5000, 200);
            let chars = (title.chars().count() + subtitle.chars().count()) as u32;
            assert_eq!(run.elapsed_ms, interval * chars + 200);
        }
    }

    #[test]
    fn cancelled_driver_goes_silent() {
        let token = CancelToken::default();
        let (mut driver, seen) = driver("ArchiDius", "The Valor of Space", token.clone());

        assert!(matches!(driver.start(), Tick::Wait(_)));
        assert!(matches!(driver.advance(), Tick::Wait(_)));
        assert!(matches!(driver.advance(), Tick::Wait(_)));
        let before = seen.borrow().len();

        token.cancel();
        for _ in 0..100 {
            assert_eq!(driver.advance(), Tick::Halted);
        }
        assert_eq!(seen.borrow().len(), before);
        assert_eq!(done_count(&seen.borrow()), 0);
        assert_eq!(driver.state().title, "Ar");
    }

    #[test]
    fn cancel_before_start_never_runs() {
        let token = CancelToken::default();
        token.cancel();
        let (mut driver, seen) = driver("A", "B", token);
        assert_eq!(driver.start(), Tick::Halted);
        assert!(seen.borrow().is_empty());
    }
}
