pub use self::flashlight::{FlashlightEvaluator, FlashlightScoring};

mod flashlight;
