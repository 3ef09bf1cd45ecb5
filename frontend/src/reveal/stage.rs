/// Phases of the intro overlay, in the only order they can occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimationStage {
    Idle,
    Ambient,
    Burst,
    Typewriter,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    /// The visitor clicked the reveal control.
    Activate,
    BurstDue,
    TypewriterDue,
    /// The typewriter finished both lines.
    TypingFinished,
}

/// Transition table of the reveal sequence. Pairs not listed leave the stage as is,
/// so the result is never lower than `stage`.
pub fn reduce(stage: AnimationStage, event: RevealEvent) -> AnimationStage {
    use AnimationStage::*;
    use RevealEvent::*;

    match (stage, event) {
        (Idle, Activate) => Ambient,
        (Ambient, BurstDue) => Burst,
        (Ambient | Burst, TypewriterDue) => Typewriter,
        (Typewriter, TypingFinished) => Revealed,
        (current, _) => current,
    }
}

impl AnimationStage {
    pub fn overlay_visible(self) -> bool {
        self < AnimationStage::Revealed
    }

    pub fn prompt_visible(self) -> bool {
        self == AnimationStage::Idle
    }

    pub fn embers_visible(self) -> bool {
        self >= AnimationStage::Ambient
    }

    pub fn burst_visible(self) -> bool {
        self >= AnimationStage::Burst
    }

    pub fn typewriter_visible(self) -> bool {
        self >= AnimationStage::Typewriter
    }
}
