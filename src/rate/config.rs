pub struct Config {
    /// Name of the rate sheet inside a zip archive.
    pub file_name: String,
    pub has_headers: bool,
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: "rates.csv".into(),
            has_headers: true,
            delimiter: b',',
        }
    }
}
