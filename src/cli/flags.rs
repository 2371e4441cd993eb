#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub board: bool,
    pub github: bool,
    pub name: Option<String>,
    pub length: Option<usize>,
    pub pools: Option<Vec<String>>,
    pub output: Option<String>,
}
