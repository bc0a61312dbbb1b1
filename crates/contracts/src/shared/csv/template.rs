use indexmap::IndexMap;

use super::writer::to_csv;

/// File name stem of the downloadable upload template
pub const LEAD_TEMPLATE_STEM: &str = "lead_upload_template";

/// Columns users fill in for a bulk lead upload
pub const LEAD_TEMPLATE_HEADERS: &[&str] = &[
    "Employee Name",
    "Source",
    "Other Source",
    "Lead Created Date",
    "Expected Close Date",
    "Last Contacted",
    "Stage",
    "Comment",
    "Remarks",
    "Client Name",
    "Client Company Name",
    "Product Name",
    "Assign Team Member",
    "Email",
    "Phone",
];

const SAMPLE_ROWS: &[&[&str]] = &[
    &[
        "Rahul Sharma",
        "Website",
        "",
        "2024-01-15",
        "2024-02-15",
        "2024-01-20",
        "New",
        "Interested in premium plan",
        "Follow up next week",
        "Anita Verma",
        "Verma Traders",
        "CRM Suite",
        "Priya Singh",
        "anita@vermatraders.in",
        "9876543210",
    ],
    &[
        "Priya Singh",
        "Other",
        "Trade fair, Mumbai",
        "2024-01-18",
        "2024-03-01",
        "2024-01-25",
        "Qualified",
        "Asked for a \"demo\" call",
        "",
        "Karan Mehta",
        "Mehta & Sons",
        "Billing Module",
        "Rahul Sharma",
        "karan@mehtasons.com",
        "9123456780",
    ],
];

/// CSV text of the bulk upload template: the header row plus two sample rows
pub fn lead_upload_template() -> String {
    let rows: Vec<IndexMap<&str, &str>> = SAMPLE_ROWS
        .iter()
        .map(|values| {
            LEAD_TEMPLATE_HEADERS
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect()
        })
        .collect();

    to_csv(&rows)
}
