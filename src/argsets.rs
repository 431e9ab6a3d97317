use std::path::PathBuf;

pub struct ProduceArgs {
    pub config_file: PathBuf,
}

pub struct FetchOnceArgs {
    pub config_file: PathBuf,
}
