//! List options for collection requests.
//!
//! `ListOptions` is a builder over the `OData` options Insightly understands
//! (`$top`, `$skip`, `$orderby`, `$filter`) plus the resource-specific
//! `email`, `tag`, `ids` and `teamid` parameters. Parameters are emitted in
//! the order the builder methods were called.

use crate::{error::InsightlyError, http::Request};

/// Which list options a resource accepts.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSupport {
    pub odata: bool,
    pub email: bool,
    pub tag: bool,
    pub ids: bool,
    pub team_id: bool,
}

impl ListSupport {
    pub const NONE: Self = Self {
        odata: false,
        email: false,
        tag: false,
        ids: false,
        team_id: false,
    };

    pub const ODATA: Self = Self {
        odata: true,
        ..Self::NONE
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListParam {
    Top(u32),
    Skip(u32),
    OrderBy(String),
    Filter(String),
    Email(String),
    Tag(String),
    Ids(Vec<u64>),
    TeamId(u64),
}

impl ListParam {
    const fn option_name(&self) -> &'static str {
        match self {
            Self::Top(_) => "top",
            Self::Skip(_) => "skip",
            Self::OrderBy(_) => "orderby",
            Self::Filter(_) => "filter",
            Self::Email(_) => "email",
            Self::Tag(_) => "tag",
            Self::Ids(_) => "ids",
            Self::TeamId(_) => "teamid",
        }
    }

    const fn is_supported(&self, support: ListSupport) -> bool {
        match self {
            Self::Top(_) | Self::Skip(_) | Self::OrderBy(_) | Self::Filter(_) => support.odata,
            Self::Email(_) => support.email,
            Self::Tag(_) => support.tag,
            Self::Ids(_) => support.ids,
            Self::TeamId(_) => support.team_id,
        }
    }

    fn apply(&self, request: Request) -> Request {
        match self {
            Self::Top(n) => request.query_param("$top", n),
            Self::Skip(n) => request.query_param("$skip", n),
            Self::OrderBy(expr) => request.query_param("$orderby", expr),
            Self::Filter(expr) => request.query_param("$filter", rewrite_filter(expr)),
            Self::Email(email) => request.query_param("email", email),
            Self::Tag(tag) => request.query_param("tag", tag),
            Self::Ids(ids) => {
                let joined = ids
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                request.query_param("ids", joined)
            }
            Self::TeamId(id) => request.query_param("teamid", id),
        }
    }
}

/// Query options for a list call.
///
/// ```
/// use insightly_client::ListOptions;
///
/// let options = ListOptions::new()
///     .order_by("DATE_UPDATED_UTC desc")
///     .top(5)
///     .filter("AGE>21");
/// assert!(!options.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    params: Vec<ListParam>,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Limits the number of records returned (`$top`). Zero means no limit
    /// and sends nothing.
    #[must_use]
    pub fn top(mut self, n: u32) -> Self {
        if n > 0 {
            self.params.push(ListParam::Top(n));
        }
        self
    }

    /// Skips the first `n` records (`$skip`). Zero sends nothing.
    #[must_use]
    pub fn skip(mut self, n: u32) -> Self {
        if n > 0 {
            self.params.push(ListParam::Skip(n));
        }
        self
    }

    /// Sort expression such as `"DATE_UPDATED_UTC desc"` (`$orderby`).
    #[must_use]
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.params.push(ListParam::OrderBy(expr.into()));
        self
    }

    /// Adds one `$filter`. May be called repeatedly; `=`, `>` and `<` are
    /// rewritten to `eq`, `gt` and `lt`.
    #[must_use]
    pub fn filter(mut self, expr: impl Into<String>) -> Self {
        self.params.push(ListParam::Filter(expr.into()));
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.params.push(ListParam::Email(email.into()));
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.params.push(ListParam::Tag(tag.into()));
        self
    }

    #[must_use]
    pub fn ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.params.push(ListParam::Ids(ids.into_iter().collect()));
        self
    }

    #[must_use]
    pub fn team_id(mut self, team_id: u64) -> Self {
        self.params.push(ListParam::TeamId(team_id));
        self
    }

    /// Appends every option to `request` in call order.
    ///
    /// # Errors
    /// Returns `InsightlyError::UnsupportedOption` naming the first option the
    /// resource does not accept; nothing is appended in that case.
    pub fn apply(
        &self,
        resource: &'static str,
        support: ListSupport,
        request: Request,
    ) -> Result<Request, InsightlyError> {
        if let Some(param) = self.params.iter().find(|p| !p.is_supported(support)) {
            return Err(InsightlyError::UnsupportedOption {
                resource,
                option: param.option_name(),
            });
        }

        Ok(self.params.iter().fold(request, |request, param| param.apply(request)))
    }
}

/// Rewrites the comparison shorthand of a filter expression into `OData`
/// operators: `=` → ` eq `, `>` → ` gt `, `<` → ` lt `.
#[must_use]
pub fn rewrite_filter(expr: &str) -> String {
    let mut rewritten = String::with_capacity(expr.len() + 8);
    for c in expr.chars() {
        match c {
            '=' => rewritten.push_str(" eq "),
            '>' => rewritten.push_str(" gt "),
            '<' => rewritten.push_str(" lt "),
            other => rewritten.push(other),
        }
    }
    rewritten
}
