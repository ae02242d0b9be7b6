use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::products::Column;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Raw listing parameters exactly as they arrive on the query string. Kept
/// as strings so that junk values sanitize to defaults instead of failing
/// extraction; normalization has no error path.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListingParams {
    pub size: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Code,
    Name,
    Category,
    Brand,
    Kind,
    Description,
    CreatedAt,
}

impl SortField {
    /// Resolve a caller-supplied sort name against the known column set.
    /// Unknown names fall back to `id` rather than reaching the database.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "code" => SortField::Code,
            "name" => SortField::Name,
            "category" => SortField::Category,
            "brand" => SortField::Brand,
            "type" => SortField::Kind,
            "description" => SortField::Description,
            "created_at" => SortField::CreatedAt,
            _ => SortField::Id,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Brand => "brand",
            SortField::Kind => "type",
            SortField::Description => "description",
            SortField::CreatedAt => "created_at",
        }
    }

    pub fn column(self) -> Column {
        match self {
            SortField::Id => Column::Id,
            SortField::Code => Column::Code,
            SortField::Name => Column::Name,
            SortField::Category => Column::Category,
            SortField::Brand => Column::Brand,
            SortField::Kind => Column::Kind,
            SortField::Description => Column::Description,
            SortField::CreatedAt => Column::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive match on `desc`; anything else sorts ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// The sanitized listing query shared by the API and web responders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u64,
    pub size: u64,
    pub sort: SortField,
    pub dir: SortDirection,
}

impl ListingQuery {
    /// Saturating arithmetic: `page` passes through unclamped, so an
    /// absurdly large value must pin to the end of the range instead of
    /// overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

impl ListingParams {
    /// Derive the clamped listing query. Non-numeric or non-positive `size`
    /// and `page` coerce to their defaults, oversized `size` clamps to 100,
    /// and the sort pair sanitizes per `SortField`/`SortDirection`.
    pub fn normalize(&self) -> ListingQuery {
        let size = match self.size.as_deref().map(str::parse::<i64>) {
            Some(Ok(n)) if n > 0 => (n as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        let page = match self.page.as_deref().map(str::parse::<i64>) {
            Some(Ok(n)) if n > 0 => n as u64,
            _ => DEFAULT_PAGE,
        };

        let sort = self
            .sort
            .as_deref()
            .filter(|s| !s.is_empty())
            .map_or(SortField::Id, SortField::parse);
        let dir = self
            .dir
            .as_deref()
            .map_or(SortDirection::Asc, SortDirection::parse);

        ListingQuery {
            page,
            size,
            sort,
            dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: Option<&str>, page: Option<&str>) -> ListingParams {
        ListingParams {
            size: size.map(str::to_string),
            page: page.map(str::to_string),
            sort: None,
            dir: None,
        }
    }

    #[test]
    fn defaults_when_absent() {
        let q = ListingParams::default().normalize();
        assert_eq!(q.page, 1);
        assert_eq!(q.size, 10);
        assert_eq!(q.sort, SortField::Id);
        assert_eq!(q.dir, SortDirection::Asc);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn junk_size_coerces_to_default() {
        for raw in ["abc", "", "0", "-5", "1.5"] {
            let q = params(Some(raw), None).normalize();
            assert_eq!(q.size, 10, "size {raw:?}");
        }
    }

    #[test]
    fn oversized_size_clamps_to_max() {
        assert_eq!(params(Some("101"), None).normalize().size, 100);
        assert_eq!(params(Some("10000"), None).normalize().size, 100);
        assert_eq!(params(Some("100"), None).normalize().size, 100);
    }

    #[test]
    fn in_range_size_passes_through() {
        assert_eq!(params(Some("1"), None).normalize().size, 1);
        assert_eq!(params(Some("25"), None).normalize().size, 25);
    }

    #[test]
    fn junk_page_coerces_to_one() {
        for raw in ["abc", "", "0", "-1"] {
            let q = params(None, Some(raw)).normalize();
            assert_eq!(q.page, 1, "page {raw:?}");
        }
    }

    #[test]
    fn offset_is_page_minus_one_times_size() {
        let q = params(Some("20"), Some("3")).normalize();
        assert_eq!(q.offset(), 40);
        let q = params(Some("100"), Some("1")).normalize();
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let q = params(Some("100"), Some("9223372036854775806")).normalize();
        assert_eq!(q.offset(), u64::MAX);
        let q = params(Some("10"), Some(&i64::MAX.to_string())).normalize();
        assert_eq!(q.offset(), u64::MAX);
    }

    #[test]
    fn sort_direction_matches_desc_case_insensitively() {
        for raw in ["desc", "DESC", "Desc"] {
            let p = ListingParams {
                dir: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(p.normalize().dir, SortDirection::Desc, "dir {raw:?}");
        }
        for raw in ["asc", "ASC", "descending", "up", ""] {
            let p = ListingParams {
                dir: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(p.normalize().dir, SortDirection::Asc, "dir {raw:?}");
        }
    }

    #[test]
    fn unknown_sort_field_falls_back_to_id() {
        for raw in ["price", "id; drop table products", ""] {
            let p = ListingParams {
                sort: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(p.normalize().sort, SortField::Id, "sort {raw:?}");
        }
        let p = ListingParams {
            sort: Some("category".to_string()),
            ..Default::default()
        };
        assert_eq!(p.normalize().sort, SortField::Category);
    }
}
