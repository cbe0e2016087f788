//! Site content records and the published default set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Link inside a navigation dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// Top-level navigation entry with its dropdown links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}

/// Service delivery charter row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterEntry {
    pub service: String,
    pub requirements: String,
    pub turnaround: String,
}

/// Downloadable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub category: String,
    pub download_url: String,
}

/// Procurement notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    #[serde(rename = "ref")]
    pub reference: String,
    pub title: String,
    /// Last day bids are accepted (inclusive)
    pub closing: NaiveDate,
    pub download_url: String,
}

impl Tender {
    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.closing >= today
    }
}

/// Board or committee member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// "Find Us" and "Get in Touch" details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub campus: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Everything the site displays that is not computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub nav_links: Vec<NavGroup>,
    pub service_charter: Vec<CharterEntry>,
    pub resources: Vec<Resource>,
    pub tenders: Vec<Tender>,
    pub management_board: Vec<Person>,
    pub supervisory_committee: Vec<Person>,
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl SiteContent {
    /// Tenders still accepting bids on `today`
    pub fn open_tenders(&self, today: NaiveDate) -> Vec<&Tender> {
        self.tenders.iter().filter(|t| t.is_open(today)).collect()
    }

    pub fn nav_group(&self, title: &str) -> Option<&NavGroup> {
        self.nav_links.iter().find(|g| g.title == title)
    }

    /// Resources in a category, e.g. "Membership"
    pub fn resources_in(&self, category: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Content currently published on the Alupe University Sacco site
    pub fn alupe_default() -> Self {
        Self {
            nav_links: vec![
                nav_group("Membership", &[
                    ("Join Us", "#join"),
                    ("Member Rights", "#rights"),
                    ("Careers", "#careers"),
                ]),
                nav_group("Products", &[
                    ("FOSA Savings", "#fosa"),
                    ("BOSA Loans", "#bosa"),
                    ("Welfare Fund", "#welfare"),
                ]),
                nav_group("Media", &[
                    ("News", "#news"),
                    ("Events", "#events"),
                    ("Photo Gallery", "#gallery"),
                ]),
                nav_group("Resources", &[
                    ("Downloads", "#downloads"),
                    ("Tenders", "#tenders"),
                    ("Financial Reports", "#reports"),
                ]),
            ],
            service_charter: [
                ("Emergency Loans", "Fully filled form, 3 guarantors", "12 Hours"),
                ("Normal Loans", "3X Deposits, 5 guarantors", "48 Hours"),
                ("Membership Withdrawal", "Written notice, 60 days notice", "60 Days"),
                ("FOSA Salary Processing", "Salary through FOSA", "Instant"),
                ("Benevolent Claim", "Death certificate, ID copy", "24 Hours"),
            ]
            .iter()
            .map(|&(service, requirements, turnaround)| CharterEntry {
                service: service.to_string(),
                requirements: requirements.to_string(),
                turnaround: turnaround.to_string(),
            })
            .collect(),
            resources: [
                ("Loan Application & Agreement Form", "Loans", "/docs/loan_application_form.pdf"),
                ("Package Application Form", "Savings", "/docs/package_application_form.pdf"),
                ("Shares Increment/Reduction Form", "Membership", "/docs/shares_adjustment_form.pdf"),
                ("Membership Application Form", "Membership", "/docs/membership_application.pdf"),
                ("Benevolent Fund Form", "Welfare", "/docs/benevolent_fund.pdf"),
            ]
            .iter()
            .map(|&(title, category, url)| Resource {
                title: title.to_string(),
                category: category.to_string(),
                download_url: url.to_string(),
            })
            .collect(),
            tenders: vec![
                tender("AUS/T/001/2024", "Provision of External Audit Services", (2024, 3, 15), "/docs/tender_audit_services.pdf"),
                tender("AUS/T/002/2024", "Supply of Office Stationery", (2024, 3, 20), "/docs/tender_stationery.pdf"),
                tender("AUS/T/003/2024", "IT Infrastructure Maintenance", (2024, 3, 25), "/docs/tender_it_maintenance.pdf"),
            ],
            management_board: people(&[
                ("Dr. Hezekiah Othoo", "Chairperson", "mgt1"),
                ("Dr. Boswell Owuor", "Vice Chairperson", "mgt2"),
                ("Mr. Wycliffe Omondi", "Treasurer", "mgt3"),
                ("Mr. Michael Ochieng", "Credit Committee Chair", "mgt4"),
                ("Dr. Charles Omoga", "Tender Committee Chair", "mgt5"),
                ("Mr. Selestine Oramisias", "Credit Committee Member", "mgt6"),
            ]),
            supervisory_committee: people(&[
                ("Prof. Arnety Makokha", "Chairperson", "sup1"),
                ("Mr. Collins Kidaga", "Member", "sup2"),
            ]),
            gallery_images: (1..=6)
                .map(|i| format!("https://picsum.photos/seed/sacco{}/800/600", i))
                .collect(),
            contact: ContactDetails {
                campus: "Alupe University Main Campus".to_string(),
                address: "Busia - Malaba Road, Busia, Kenya".to_string(),
                phone: "0728983065".to_string(),
                email: "info@alupesacco.co.ke".to_string(),
            },
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::alupe_default()
    }
}

fn nav_group(title: &str, items: &[(&str, &str)]) -> NavGroup {
    NavGroup {
        title: title.to_string(),
        items: items
            .iter()
            .map(|&(label, href)| NavItem {
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect(),
    }
}

fn tender(reference: &str, title: &str, (y, m, d): (i32, u32, u32), url: &str) -> Tender {
    Tender {
        reference: reference.to_string(),
        title: title.to_string(),
        // Built-in dates are literal calendar days
        closing: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap_or_else(|| panic!("invalid built-in closing date for {}: {}-{}-{}", reference, y, m, d)),
        download_url: url.to_string(),
    }
}

/// Portrait URLs are placeholder images keyed by seed
fn people(rows: &[(&str, &str, &str)]) -> Vec<Person> {
    rows.iter()
        .map(|&(name, role, seed)| Person {
            name: name.to_string(),
            role: role.to_string(),
            image: format!("https://picsum.photos/seed/{}/200/200", seed),
        })
        .collect()
}
