use std::env;

const DEFAULT_DATASET_FILE_PATTERN: &str = "data/Cars.csv";
const DEFAULT_MODEL_FILE_PATH: &str = "data/car_price.safetensors";

/// Path or glob pattern of the historical sales CSV file(s)
pub fn get_dataset_file_pattern() -> String {
    env::var("DATASET_FILE_PATH").unwrap_or_else(|_| DEFAULT_DATASET_FILE_PATTERN.to_string())
}

/// Path of the trained model artifact
pub fn get_model_file_path() -> String {
    env::var("MODEL_FILE_PATH").unwrap_or_else(|_| DEFAULT_MODEL_FILE_PATH.to_string())
}
