/// Human-readable verbosity level, e.g. `"1 (Verbose)"`.
pub fn verbosity_string(verbosity: Option<i64>) -> String {
    let level = verbosity.unwrap_or(0);
    let name = match level {
        0 => "Normal",
        1 => "Verbose",
        2 => "More Verbose",
        3 => "Debug",
        4 => "Connection Debug",
        5 => "WinRM Debug",
        _ => return level.to_string(),
    };
    format!("{} ({})", level, name)
}
