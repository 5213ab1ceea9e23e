use std::{collections::HashMap, str::FromStr};

/// Comparison requested for a filtered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gte,
    Lte,
    In,
    Like,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            "like" | "ilike" => Ok(FilterOperator::Like),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    /// Comma-separated values of an `in` filter.
    pub fn values(&self) -> Vec<String> {
        self.value
            .split(',')
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    /// Parses "field1,-field2".
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }

    /// The repository form of the sort, or `None` when nothing was requested.
    pub fn to_sort_string(&self) -> Option<String> {
        if self.sorts.is_empty() {
            return None;
        }

        Some(
            self.sorts
                .iter()
                .map(|s| match s.direction {
                    SortDirection::Desc => format!("-{}", s.field),
                    SortDirection::Asc => s.field.clone(),
                })
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(20).clamp(1, 100),
        }
    }
}

/// Filter, sort and pagination parameters of a list endpoint.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Accepts `filter[field]=v`, `filter[field][op]=v`, `sort=-field`,
    /// `offset` and `limit`. Unknown keys and operators are ignored.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut sort = SortParams::default();
        let mut offset: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let Some(end_bracket) = filter_key.find(']') else {
                    continue;
                };
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                let operator = if remaining.is_empty() {
                    Some(FilterOperator::Eq)
                } else {
                    remaining
                        .strip_prefix('[')
                        .and_then(|r| r.strip_suffix(']'))
                        .and_then(|op| op.parse().ok())
                };

                if let Some(operator) = operator {
                    filter.conditions.push(FilterCondition {
                        field,
                        operator,
                        value: value.clone(),
                    });
                }
            } else if key == "sort" {
                sort = SortParams::from_string(value);
            } else if key == "offset" {
                offset = value.parse().ok();
            } else if key == "limit" {
                limit = value.parse().ok();
            }
        }

        Self {
            filter,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn bare_filter_defaults_to_eq() {
        let params = params(&[("filter[category]", "grains")]);

        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.conditions[0].field, "category");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Eq);
        assert_eq!(params.filter.conditions[0].value, "grains");
    }

    #[test]
    fn filter_with_operator() {
        let params = params(&[("filter[calories][lte]", "200")]);

        assert_eq!(params.filter.conditions[0].field, "calories");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Lte);
    }

    #[test]
    fn unknown_operator_is_dropped() {
        let params = params(&[("filter[calories][between]", "1,2")]);
        assert!(params.filter.conditions.is_empty());
    }

    #[test]
    fn in_filter_splits_values() {
        let params = params(&[("filter[category][in]", "grains, dairy,")]);
        assert_eq!(params.filter.conditions[0].values(), vec!["grains", "dairy"]);
    }

    #[test]
    fn sort_round_trips_to_repository_form() {
        let params = params(&[("sort", "-calories,name")]);

        assert_eq!(params.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.sort.sorts[1].field, "name");
        assert_eq!(params.sort.to_sort_string().as_deref(), Some("-calories,name"));
        assert_eq!(SortParams::default().to_sort_string(), None);
    }

    #[test]
    fn pagination_is_clamped() {
        let params = params(&[("offset", "-5"), ("limit", "500")]);

        assert_eq!(params.pagination.offset, 0);
        assert_eq!(params.pagination.limit, 100);
        assert_eq!(PaginationParams::default().limit, 20);
    }
}
