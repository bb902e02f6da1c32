use crate::constants::TAXONOMIC_PARTS_OF_SPEECH;
use crate::models::{CountingMode, IcCounterConfig, MeasureConfig, TextEncoding};

pub const DEFAULT_MEASURE_CONFIG: MeasureConfig = MeasureConfig {
    use_synthetic_root: true,
    info_content_path: None,
    mapping_path: None,
    encoding: TextEncoding::Utf8,
};

pub const DEFAULT_IC_COUNTER_CONFIG: IcCounterConfig = IcCounterConfig {
    counting_mode: CountingMode::Whole,
    parts_of_speech: TAXONOMIC_PARTS_OF_SPEECH,
};
