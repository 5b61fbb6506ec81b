//! Result card projection
//!
//! Pure mapping from an [`AnalysisResult`] to the five cards the front ends
//! display. Holds no state.

use crate::types::AnalysisResult;

/// Label for a positive fingerprinting flag
pub const FINGERPRINTING_DETECTED: &str = "Potential Risk";
/// Label for a negative fingerprinting flag
pub const FINGERPRINTING_CLEAR: &str = "Low Risk";
/// Fallback description when the security scan has no details
pub const DEFAULT_SCAN_DESCRIPTION: &str = "Basic security check result.";

/// Which metric a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Trackers,
    Cookies,
    ThirdPartyRequests,
    Fingerprinting,
    SecurityScan,
}

impl CardKind {
    /// Display order of the cards
    pub const ALL: [CardKind; 5] = [
        CardKind::Trackers,
        CardKind::Cookies,
        CardKind::ThirdPartyRequests,
        CardKind::Fingerprinting,
        CardKind::SecurityScan,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CardKind::Trackers => "Trackers",
            CardKind::Cookies => "Cookies",
            CardKind::ThirdPartyRequests => "Third-Party Requests",
            CardKind::Fingerprinting => "Fingerprinting Risk",
            CardKind::SecurityScan => "Security Scan (VirusTotal)",
        }
    }

    /// Explanatory text shown when tips are enabled
    pub fn tooltip(self) -> &'static str {
        match self {
            CardKind::Trackers => {
                "These are elements, often from third parties, used to monitor your behavior \
                 across websites for advertising or analytics."
            }
            CardKind::Cookies => {
                "Websites use cookies to remember information about you, like login status or \
                 preferences. Some cookies, especially third-party ones, can track you across sites."
            }
            CardKind::ThirdPartyRequests => {
                "Requests made by the website to domains other than its own, often for loading \
                 ads, fonts, analytics, or other external resources."
            }
            CardKind::Fingerprinting => {
                "Browser fingerprinting uses subtle characteristics of your browser and device \
                 (like screen size, fonts, plugins) to create a unique ID for tracking, even \
                 without cookies."
            }
            CardKind::SecurityScan => {
                "Checks the URL against VirusTotal's database of malicious websites. 'N/A' means \
                 the check couldn't be performed (e.g., requires API key)."
            }
        }
    }

    /// Wide cards span the full row
    pub fn is_wide(self) -> bool {
        matches!(self, CardKind::SecurityScan)
    }

    fn static_description(self) -> &'static str {
        match self {
            CardKind::Trackers => "External scripts/pixels monitoring activity.",
            CardKind::Cookies => "Small data files stored on your device.",
            CardKind::ThirdPartyRequests => "Connections to external domains.",
            CardKind::Fingerprinting => "Techniques to uniquely identify your browser.",
            CardKind::SecurityScan => DEFAULT_SCAN_DESCRIPTION,
        }
    }
}

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub value: String,
    pub description: String,
    pub tooltip: &'static str,
    pub wide: bool,
}

/// Project an analysis result onto its cards, in display order
pub fn result_cards(result: &AnalysisResult) -> Vec<ResultCard> {
    CardKind::ALL
        .iter()
        .map(|&kind| ResultCard {
            kind,
            title: kind.title(),
            value: card_value(kind, result),
            description: card_description(kind, result),
            tooltip: kind.tooltip(),
            wide: kind.is_wide(),
        })
        .collect()
}

fn card_value(kind: CardKind, result: &AnalysisResult) -> String {
    match kind {
        CardKind::Trackers => result.trackers.to_string(),
        CardKind::Cookies => result.cookies.to_string(),
        CardKind::ThirdPartyRequests => result.third_party_requests.to_string(),
        CardKind::Fingerprinting => fingerprinting_label(result.fingerprinting).to_string(),
        CardKind::SecurityScan => result.virus_total.score.clone(),
    }
}

fn card_description(kind: CardKind, result: &AnalysisResult) -> String {
    match kind {
        CardKind::SecurityScan => result
            .virus_total
            .details
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_SCAN_DESCRIPTION)
            .to_string(),
        _ => kind.static_description().to_string(),
    }
}

pub fn fingerprinting_label(detected: bool) -> &'static str {
    if detected {
        FINGERPRINTING_DETECTED
    } else {
        FINGERPRINTING_CLEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VirusTotalResult;

    fn example_result() -> AnalysisResult {
        AnalysisResult {
            trackers: 3,
            cookies: 12,
            third_party_requests: 7,
            fingerprinting: true,
            virus_total: VirusTotalResult {
                score: "Clean".to_string(),
                details: None,
            },
        }
    }

    #[test]
    fn test_card_values_for_example_scenario() {
        let values: Vec<String> = result_cards(&example_result())
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec!["3", "12", "7", "Potential Risk", "Clean"]);
    }

    #[test]
    fn test_card_order_and_titles() {
        let titles: Vec<&str> = result_cards(&example_result())
            .iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Trackers",
                "Cookies",
                "Third-Party Requests",
                "Fingerprinting Risk",
                "Security Scan (VirusTotal)"
            ]
        );
    }

    #[test]
    fn test_fingerprinting_clear_label() {
        let mut result = example_result();
        result.fingerprinting = false;
        let cards = result_cards(&result);
        assert_eq!(cards[3].value, "Low Risk");
    }

    #[test]
    fn test_scan_description_uses_details_when_present() {
        let mut result = example_result();
        result.virus_total.details =
            Some("VirusTotal analysis requires API key configuration.".to_string());
        let cards = result_cards(&result);
        assert_eq!(
            cards[4].description,
            "VirusTotal analysis requires API key configuration."
        );
    }

    #[test]
    fn test_scan_description_falls_back_when_missing_or_empty() {
        let cards = result_cards(&example_result());
        assert_eq!(cards[4].description, DEFAULT_SCAN_DESCRIPTION);

        let mut result = example_result();
        result.virus_total.details = Some(String::new());
        assert_eq!(result_cards(&result)[4].description, DEFAULT_SCAN_DESCRIPTION);
    }

    #[test]
    fn test_only_security_scan_is_wide() {
        let wide: Vec<bool> = result_cards(&example_result())
            .iter()
            .map(|c| c.wide)
            .collect();
        assert_eq!(wide, vec![false, false, false, false, true]);
    }
}
