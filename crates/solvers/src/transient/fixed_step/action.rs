/// Control actions supported by the fixed-step driver.
///
/// There are none: observers of a fixed-step run are side channels and cannot
/// stop or steer it. The enum is uninhabited, so the only value an observer
/// can return is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
