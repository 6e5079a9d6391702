// User-facing notice texts

pub const TITLE_INPUT_REQUIRED: &str = "Input required";
pub const MSG_INPUT_REQUIRED: &str = "Please enter a value.";

pub const TITLE_EMPTY: &str = "Empty";
pub const MSG_EMPTY: &str = "Queue is empty.";

pub const TITLE_DEQUEUED: &str = "Dequeued";
pub const TITLE_FRONT: &str = "Front";
