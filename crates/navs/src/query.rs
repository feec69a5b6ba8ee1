use anyhow::{bail, Result};
use derive_more::Display;
use log::debug;
use nav_tree::{GroupRecord, Metadata};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::nav::NavRecord;
use crate::page::ListResult;

/// Anything that can be listed, filtered and sorted like a stored record
pub trait Listed {
    fn metadata(&self) -> &Metadata;

    /// Priority as stored, `None` when never set
    fn raw_priority(&self) -> Option<i32>;

    fn display_name(&self) -> &str;

    fn record_name(&self) -> &str {
        &self.metadata().name
    }

    fn creation_timestamp(&self) -> Option<&str> {
        self.metadata().creation_timestamp.as_deref()
    }
}

impl Listed for NavRecord {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn raw_priority(&self) -> Option<i32> {
        self.spec.priority
    }

    fn display_name(&self) -> &str {
        &self.spec.display_name
    }
}

impl Listed for GroupRecord {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn raw_priority(&self) -> Option<i32> {
        self.spec.priority
    }

    fn display_name(&self) -> &str {
        &self.spec.display_name
    }
}

/// Fields a list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortField {
    #[display(fmt = "creationTimestamp")]
    CreationTimestamp,
    #[display(fmt = "priority")]
    Priority,
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "creationTimestamp" => Ok(SortField::CreationTimestamp),
            "priority" => Ok(SortField::Priority),
            other => bail!(
                "unsupported sort field `{}`, expected creationTimestamp or priority",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Direction {
    #[default]
    #[display(fmt = "asc")]
    Asc,
    #[display(fmt = "desc")]
    Desc,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => bail!("unknown sort direction `{}`, expected asc or desc", other),
        }
    }
}

/// A single `field,direction` sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{},{}", field, direction)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }

    fn compare<T: Listed>(&self, a: &T, b: &T) -> Ordering {
        // Option orders None first, so absent values sort lowest
        let ordering = match self.field {
            SortField::CreationTimestamp => a.creation_timestamp().cmp(&b.creation_timestamp()),
            SortField::Priority => a.raw_priority().cmp(&b.raw_priority()),
        };
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    /// Parse `field` or `field,direction`
    fn from_str(s: &str) -> Result<Self> {
        let (field, direction) = s.split_once(',').unwrap_or((s, ""));
        Ok(Self {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Requested sort orders, applied in the order given
///
/// Whatever the request, ties finally fall back to newest first and then to
/// the record name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(order: SortOrder) -> Self {
        Self {
            orders: vec![order],
        }
    }

    pub fn and(mut self, order: SortOrder) -> Self {
        self.orders.push(order);
        self
    }

    /// Parse a list of `field,direction` strings
    pub fn parse<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let orders = specs
            .into_iter()
            .map(|spec| spec.as_ref().parse())
            .collect::<Result<Vec<SortOrder>>>()?;
        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn compare<T: Listed>(&self, a: &T, b: &T) -> Ordering {
        self.orders
            .iter()
            .map(|order| order.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.creation_timestamp().cmp(&a.creation_timestamp()))
            .then_with(|| a.record_name().cmp(b.record_name()))
    }
}

impl From<Vec<SortOrder>> for Sort {
    fn from(orders: Vec<SortOrder>) -> Self {
        Self { orders }
    }
}

/// Trimmed, lowercased keyword, or `None` when it is blank
fn normalize_keyword(keyword: Option<&str>) -> Option<String> {
    keyword
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|haystack| haystack.to_lowercase().contains(needle))
}

fn list_matching<T, P>(records: &[T], sort: &Sort, page: usize, size: usize, predicate: P) -> ListResult<T>
where
    T: Listed + Clone,
    P: Fn(&T) -> bool,
{
    let mut matching: Vec<T> = records.iter().filter(|&record| predicate(record)).cloned().collect();
    matching.sort_by(|a, b| sort.compare(a, b));
    debug!(
        "{} of {} records match, returning page {} (size {})",
        matching.len(),
        records.len(),
        page,
        size
    );
    ListResult::paginate(matching, page, size)
}

/// Filter for listing navs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavQuery {
    /// Matched against display name, description and url, ignoring case
    pub keyword: Option<String>,
    /// Exact group name; blank matches every group
    pub group_name: Option<String>,
    pub sort: Sort,
}

impl NavQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, nav: &NavRecord) -> bool {
        let group_matches = match self.group_name.as_deref().map(str::trim) {
            Some(group) if !group.is_empty() => nav.spec.group_name.as_deref() == Some(group),
            _ => true,
        };
        if !group_matches {
            return false;
        }

        match normalize_keyword(self.keyword.as_deref()) {
            None => true,
            Some(keyword) => {
                contains_ignore_case(Some(&nav.spec.display_name), &keyword)
                    || contains_ignore_case(nav.spec.description.as_deref(), &keyword)
                    || contains_ignore_case(Some(&nav.spec.url), &keyword)
            }
        }
    }

    /// Filter, sort and cut one page out of `navs`
    pub fn list(&self, navs: &[NavRecord], page: usize, size: usize) -> ListResult<NavRecord> {
        list_matching(navs, &self.sort, page, size, |nav| self.matches(nav))
    }
}

/// Filter for listing groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavGroupQuery {
    /// Matched against display name, ignoring case
    pub keyword: Option<String>,
    pub sort: Sort,
}

impl NavGroupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, group: &GroupRecord) -> bool {
        match normalize_keyword(self.keyword.as_deref()) {
            None => true,
            Some(keyword) => contains_ignore_case(Some(&group.spec.display_name), &keyword),
        }
    }

    pub fn list(&self, groups: &[GroupRecord], page: usize, size: usize) -> ListResult<GroupRecord> {
        list_matching(groups, &self.sort, page, size, |group| self.matches(group))
    }
}
