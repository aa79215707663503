// Interactive answer parsing (pure)

/// Parse a launch configuration index typed by the user
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|idx| *idx < count)
}

/// `[Y/n]`: anything but an answer starting with "n" means yes
pub fn confirmed(input: &str) -> bool {
    !input.trim_start().to_ascii_uppercase().starts_with('N')
}
