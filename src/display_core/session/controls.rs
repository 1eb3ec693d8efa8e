#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneParameter {
    IMax,
    Lambda,
    Mu,
}

/// A bounded control bound to one display parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MainHigh,
    MainLow,
    MainGamma,
    LimbHigh,
    LimbLow,
    LimbGamma,
    WhiteBalance(ColorChannel),
    ToneMapping(ToneParameter),
}

/// "Move `control` to `position`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlIntent {
    pub control: Control,
    pub position: i32,
}

impl ControlIntent {
    pub fn new(control: Control, position: i32) -> Self {
        Self { control, position }
    }
}
