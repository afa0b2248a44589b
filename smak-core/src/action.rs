/// Every user interaction produces an Action. The state machine never sees raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Confirm,
    Cancel,
    ToggleDelete,
    StartMerge,

    // Movement
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    MoveTop,
    MoveBottom,
}
