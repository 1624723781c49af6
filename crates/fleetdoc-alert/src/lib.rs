//! # fleetdoc-alert: The Expiry Alert Feed
//!
//! Scans every document slot across every holder and classifies dated
//! documents by days until expiry. The result is one globally sorted
//! feed: most urgent first, already-expired documents kept visible for a
//! grace period before dropping off.
//!
//! Evaluation is a pure function over [`DocumentHolder`] views. It holds
//! no state, mutates nothing, and cannot fail: slots are either reported
//! or skipped, never an error. Malformed dates cannot reach it because
//! [`ExpiryDate`] rejects them at construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fleetdoc_core::{DocumentHolder, DocumentType, ExpiryDate, HolderKind};

/// The window of days-until-expiry worth alerting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertWindows {
    /// Documents expiring within this many days are reported.
    pub warning_days: i64,
    /// Expired documents stay in the feed this many days past expiry.
    pub grace_days: i64,
}

impl Default for AlertWindows {
    fn default() -> Self {
        Self {
            warning_days: 15,
            grace_days: 7,
        }
    }
}

impl AlertWindows {
    /// Whether a document `days_left` from expiry falls inside the feed
    /// window.
    pub fn contains(&self, days_left: i64) -> bool {
        -self.grace_days <= days_left && days_left <= self.warning_days
    }
}

/// One entry of the alert feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEntry {
    /// Display name of the holder: plate or driver name.
    pub holder_name: String,
    /// Which checklist the holder carries.
    pub holder_kind: HolderKind,
    /// The document type nearing expiry.
    pub document_type: DocumentType,
    /// Display label of the document.
    pub document_label: String,
    /// The raw expiry date.
    pub expiry_date: ExpiryDate,
    /// Whole days until expiry; negative once expired.
    pub days_left: i64,
}

impl AlertEntry {
    /// Whether the document has already expired.
    pub fn is_expired(&self) -> bool {
        self.days_left < 0
    }
}

/// Evaluate the alert feed over `holders` as of `today`.
///
/// Every filled, dated slot whose days-until-expiry falls inside
/// `windows` produces one entry. Empty slots are skipped even when they
/// carry a date: a date recorded ahead of an expected upload is not an
/// expiring document. The feed is sorted ascending by `days_left`, most
/// urgent first; ties keep input order.
pub fn evaluate<'a, I>(holders: I, today: NaiveDate, windows: AlertWindows) -> Vec<AlertEntry>
where
    I: IntoIterator<Item = &'a dyn DocumentHolder>,
{
    let mut feed: Vec<AlertEntry> = Vec::new();
    for holder in holders {
        for slot in holder.slots() {
            if slot.is_empty() {
                continue;
            }
            let Some(expiry) = slot.expiry_date else {
                continue;
            };
            let days_left = expiry.days_until(today);
            if windows.contains(days_left) {
                feed.push(AlertEntry {
                    holder_name: holder.display_name(),
                    holder_kind: holder.kind(),
                    document_type: slot.document_type,
                    document_label: slot.label.clone(),
                    expiry_date: expiry,
                    days_left,
                });
            }
        }
    }
    // Stable: equal days_left keeps holder/slot input order.
    feed.sort_by_key(|entry| entry.days_left);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdoc_core::{DocumentSlot, FileAttachment, FileHandle};
    use proptest::prelude::*;

    /// Minimal holder for evaluator tests.
    struct TestHolder {
        name: String,
        slots: Vec<DocumentSlot>,
    }

    impl DocumentHolder for TestHolder {
        fn kind(&self) -> HolderKind {
            HolderKind::Vehicle
        }

        fn display_name(&self) -> String {
            self.name.clone()
        }

        fn slots(&self) -> &[DocumentSlot] {
            &self.slots
        }
    }

    fn filled_slot(document_type: DocumentType, expiry: Option<&str>) -> DocumentSlot {
        let mut slot = DocumentSlot::empty(document_type);
        slot.file = Some(FileAttachment {
            file_name: format!("{document_type}.pdf"),
            handle: FileHandle::for_content(document_type.as_str().as_bytes()),
        });
        slot.expiry_date = expiry.map(|s| ExpiryDate::parse(s).unwrap());
        slot
    }

    fn holder(name: &str, slots: Vec<DocumentSlot>) -> TestHolder {
        TestHolder {
            name: name.to_string(),
            slots,
        }
    }

    fn eval(holders: &[TestHolder], today: &str) -> Vec<AlertEntry> {
        evaluate(
            holders.iter().map(|h| h as &dyn DocumentHolder),
            NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap(),
            AlertWindows::default(),
        )
    }

    // ── Window edges ─────────────────────────────────────────────────

    #[test]
    fn test_fifteen_days_out_included_sixteen_excluded() {
        let holders = vec![holder(
            "34 A 1",
            vec![
                filled_slot(DocumentType::Registration, Some("2026-02-16")),
                filled_slot(DocumentType::EmissionTest, Some("2026-02-17")),
            ],
        )];
        let feed = eval(&holders, "2026-02-01");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].document_type, DocumentType::Registration);
        assert_eq!(feed[0].days_left, 15);
    }

    #[test]
    fn test_seven_days_past_included_eight_excluded() {
        let holders = vec![holder(
            "34 A 1",
            vec![
                filled_slot(DocumentType::Registration, Some("2026-01-25")),
                filled_slot(DocumentType::EmissionTest, Some("2026-01-24")),
            ],
        )];
        let feed = eval(&holders, "2026-02-01");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].document_type, DocumentType::Registration);
        assert_eq!(feed[0].days_left, -7);
        assert!(feed[0].is_expired());
    }

    // ── Skipping rules ───────────────────────────────────────────────

    #[test]
    fn test_undated_and_empty_slots_skipped() {
        let mut dated_but_empty = DocumentSlot::empty(DocumentType::TaxPlate);
        dated_but_empty.expiry_date = Some(ExpiryDate::parse("2026-02-05").unwrap());
        let holders = vec![holder(
            "34 A 1",
            vec![
                filled_slot(DocumentType::Registration, None),
                dated_but_empty,
            ],
        )];
        assert!(eval(&holders, "2026-02-01").is_empty());
    }

    // ── Ordering ─────────────────────────────────────────────────────

    #[test]
    fn test_feed_sorted_most_urgent_first() {
        let holders = vec![
            holder(
                "34 A 1",
                vec![filled_slot(DocumentType::Registration, Some("2026-02-10"))],
            ),
            holder(
                "34 B 2",
                vec![filled_slot(DocumentType::EmissionTest, Some("2026-01-30"))],
            ),
            holder(
                "34 C 3",
                vec![filled_slot(DocumentType::TaxPlate, Some("2026-02-03"))],
            ),
        ];
        let feed = eval(&holders, "2026-02-01");
        let days: Vec<i64> = feed.iter().map(|e| e.days_left).collect();
        assert_eq!(days, vec![-2, 2, 9]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let holders = vec![
            holder(
                "34 A 1",
                vec![filled_slot(DocumentType::Registration, Some("2026-02-10"))],
            ),
            holder(
                "34 B 2",
                vec![filled_slot(DocumentType::EmissionTest, Some("2026-02-10"))],
            ),
        ];
        let feed = eval(&holders, "2026-02-01");
        assert_eq!(feed[0].holder_name, "34 A 1");
        assert_eq!(feed[1].holder_name, "34 B 2");
    }

    // ── Window membership property ───────────────────────────────────

    proptest! {
        #[test]
        fn prop_membership_matches_window(offset in -40i64..40) {
            let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
            let expiry = today + chrono::Duration::days(offset);
            let holders = vec![holder(
                "34 A 1",
                vec![filled_slot(
                    DocumentType::Registration,
                    Some(&expiry.format("%Y-%m-%d").to_string()),
                )],
            )];
            let feed = evaluate(
                holders.iter().map(|h| h as &dyn DocumentHolder),
                today,
                AlertWindows::default(),
            );
            let expected = (-7..=15).contains(&offset);
            prop_assert_eq!(feed.len() == 1, expected);
            if let Some(entry) = feed.first() {
                prop_assert_eq!(entry.days_left, offset);
            }
        }
    }
}
