#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptTimelogPath,
    PromptClientsPath,
    PromptSitePath,

    // === REPORT MESSAGES ===
    PriceNeedsClient,
    HtmlReportWritten(String), // path
}
