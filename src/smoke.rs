//! Live smoke suite against a real Insightly account.
//!
//! Lists the catalog, walks the child collections of the most recent record
//! of each parent resource and, when asked, creates and deletes a throwaway
//! record on every writable resource the suite touches. A pass or fail is
//! recorded per check. A failing check never stops the run; the caller
//! decides what to do with the report.

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{
    client::Insightly,
    error::InsightlyError,
    odata::ListOptions,
    resources::{Resource, SubResource},
};

#[derive(Debug, Clone, Copy)]
pub struct SmokeOptions {
    /// `$top` for the larger collections.
    pub top: Option<u32>,
    /// Also create and delete a throwaway contact, event, file category,
    /// opportunity category and organisation.
    pub include_writes: bool,
}

impl Default for SmokeOptions {
    fn default() -> Self {
        Self {
            top: Some(5),
            include_writes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeCheck {
    pub name: String,
    /// Number of records seen on success, the error message on failure.
    pub outcome: Result<usize, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub checks: Vec<SmokeCheck>,
}

impl SmokeReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.outcome.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn record(&mut self, name: impl Into<String>, outcome: Result<usize, InsightlyError>) {
        let name = name.into();
        match &outcome {
            Ok(count) => info!(check = %name, count, "PASS"),
            Err(e) => warn!(check = %name, error = %e, "FAIL"),
        }
        self.checks.push(SmokeCheck {
            name,
            outcome: outcome.map_err(|e| e.to_string()),
        });
    }
}

/// One entry of the suite, run in order.
#[derive(Debug)]
enum Step<'a> {
    /// List a collection.
    List(Resource<'a>, ListOptions),
    /// List a collection, then fetch the given children of its first record.
    Walk(Resource<'a>, ListOptions, &'static [SubResource]),
    /// Create a record from the payload and delete it again by the id the
    /// API hands back.
    RoundTrip(Resource<'a>, Value),
}

impl Step<'_> {
    const fn is_write(&self) -> bool {
        matches!(self, Self::RoundTrip(..))
    }

    async fn run(self, report: &mut SmokeReport) {
        match self {
            Self::List(resource, options) => {
                let listed = resource.list::<Value>(&options).await;
                report.record(format!("list {}", resource.spec().name), listed.map(|r| r.len()));
            }
            Self::Walk(resource, options, children) => {
                let spec = resource.spec();
                let listed = resource.list::<Value>(&options).await;
                let parent = spec
                    .id_field
                    .and_then(|field| first_id(listed.as_ref().ok()?, field));
                report.record(format!("list {}", spec.name), listed.map(|r| r.len()));

                let Some(parent_id) = parent else { return };
                for &child in children {
                    let outcome = resource
                        .nested::<Value>(parent_id, child)
                        .await
                        .map(|r| r.len());
                    report.record(
                        format!("{} {} ({parent_id})", spec.name, child.segment()),
                        outcome,
                    );
                }
            }
            Self::RoundTrip(resource, payload) => {
                let spec = resource.spec();
                let created = resource.upsert::<_, Value>(&payload).await;
                let id = spec
                    .id_field
                    .and_then(|field| created.as_ref().ok()?.get(field)?.as_u64());
                report.record(format!("create {}", spec.name), created.map(|_| 1));

                if let Some(id) = id {
                    let deleted = resource.delete(id).await;
                    report.record(format!("delete {} ({id})", spec.name), deleted.map(usize::from));
                }
            }
        }
    }
}

fn recent(top: Option<u32>, order_by: &str) -> ListOptions {
    let options = ListOptions::new().order_by(order_by);
    match top {
        Some(n) => options.top(n),
        None => options,
    }
}

fn limited(top: Option<u32>) -> ListOptions {
    top.map_or_else(ListOptions::new, |n| ListOptions::new().top(n))
}

fn first_id(records: &[Value], field: &str) -> Option<u64> {
    records.first()?.get(field)?.as_u64()
}

impl Insightly {
    /// Runs the smoke suite and returns one entry per check.
    pub async fn smoke_test(&self, options: SmokeOptions) -> SmokeReport {
        let mut report = SmokeReport::default();

        // Any answer at all proves the key is accepted.
        let currencies = self.currencies().list::<Value>(&ListOptions::new()).await;
        report.record("authenticate", currencies.map(|r| r.len()));

        let users = self.users().list::<Value>(&ListOptions::new()).await;
        let user_id = users.as_ref().ok().and_then(|u| first_id(u, "USER_ID"));
        report.record("list Users", users.map(|r| r.len()));

        for step in self.smoke_plan(options.top, user_id) {
            if step.is_write() && !options.include_writes {
                continue;
            }
            step.run(&mut report).await;
        }

        let teams = self.teams().list::<Value>(&ListOptions::new()).await;
        let team_id = teams.as_ref().ok().and_then(|t| first_id(t, "TEAM_ID"));
        report.record("list Teams", teams.map(|r| r.len()));
        if let Some(team_id) = team_id {
            let members = self
                .team_members()
                .list::<Value>(&ListOptions::new().team_id(team_id))
                .await;
            report.record(format!("TeamMembers ({team_id})"), members.map(|r| r.len()));
        }

        info!(
            passed = report.passed(),
            failed = report.failed(),
            "smoke test finished"
        );
        report
    }

    /// Everything between the user lookup and the team walk. `owner_user_id`
    /// owns the throwaway event.
    fn smoke_plan(&self, top: Option<u32>, owner_user_id: Option<u64>) -> Vec<Step<'_>> {
        use SubResource::{Emails, Notes, StateHistory, Tasks};

        const UPDATED: &str = "DATE_UPDATED_UTC desc";

        vec![
            Step::Walk(self.contacts(), recent(top, UPDATED), &[Emails, Notes, Tasks]),
            Step::RoundTrip(
                self.contacts(),
                json!({
                    "SALUTATION": "Mr",
                    "FIRST_NAME": "Testy",
                    "LAST_NAME": "McTesterson",
                }),
            ),
            Step::List(self.countries(), ListOptions::new()),
            Step::List(self.currencies(), ListOptions::new()),
            Step::List(self.custom_fields(), ListOptions::new()),
            Step::List(self.emails(), limited(top)),
            Step::List(self.events(), limited(top)),
            Step::RoundTrip(
                self.events(),
                json!({
                    "TITLE": "Test Event",
                    "LOCATION": "Somewhere",
                    "DETAILS": "Details",
                    "START_DATE_UTC": "2014-07-12 12:00:00",
                    "END_DATE_UTC": "2014-07-12 13:00:00",
                    "OWNER_USER_ID": owner_user_id,
                    "ALL_DAY": false,
                    "PUBLICLY_VISIBLE": true,
                }),
            ),
            Step::List(self.file_categories(), ListOptions::new()),
            Step::RoundTrip(self.file_categories(), test_category()),
            Step::List(self.notes(), ListOptions::new()),
            Step::Walk(
                self.opportunities(),
                recent(top, UPDATED),
                &[Emails, Notes, Tasks, StateHistory],
            ),
            Step::List(self.opportunity_categories(), ListOptions::new()),
            Step::RoundTrip(self.opportunity_categories(), test_category()),
            Step::List(self.opportunity_state_reasons(), ListOptions::new()),
            Step::Walk(self.organizations(), recent(top, UPDATED), &[Emails, Notes, Tasks]),
            Step::RoundTrip(
                self.organizations(),
                json!({ "ORGANISATION_NAME": "Foo Corp", "BACKGROUND": "Details" }),
            ),
            Step::List(self.pipelines(), ListOptions::new()),
            Step::Walk(self.projects(), recent(top, UPDATED), &[Emails, Notes, Tasks]),
            Step::List(self.project_categories(), ListOptions::new()),
            Step::List(self.relationships(), ListOptions::new()),
            Step::List(self.tasks(), recent(top, "DUE_DATE desc")),
        ]
    }
}

fn test_category() -> Value {
    json!({
        "CATEGORY_NAME": "Test Category",
        "ACTIVE": true,
        "BACKGROUND_COLOR": "000000",
    })
}
