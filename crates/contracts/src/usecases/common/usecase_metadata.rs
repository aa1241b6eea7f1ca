/// Identification of a use case backed by an auxiliary service
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "scan_card"
    fn usecase_name() -> &'static str;

    /// Label of the button that triggers it
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_scan_card"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
