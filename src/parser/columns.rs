/// Resolved column indices for the fields the pipeline reads.
///
/// Headers are matched by case-insensitive substring so the source
/// document can rename "Application" to "Apply Here" without breaking the
/// run. Company and role fall back to the first and second column when no
/// header matches.
#[derive(Debug)]
pub struct ColumnMap {
    pub company: usize,
    pub role: usize,
    pub application: Option<usize>,
    pub location: Option<usize>,
    pub age: Option<usize>,
}

pub fn resolve(headers: &[String]) -> ColumnMap {
    ColumnMap {
        company: find(headers, &["company"]).unwrap_or(0),
        role: find(headers, &["role", "position"]).unwrap_or(1),
        application: find(headers, &["apply", "application"]),
        location: find(headers, &["location"]),
        age: find(headers, &["age"]),
    }
}

fn find(headers: &[String], needles: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.to_lowercase();
        needles.iter().any(|needle| header.contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn resolves_canonical_headers() {
        let map = resolve(&headers(&["Company", "Role", "Location", "Application", "Age"]));
        assert_eq!(map.company, 0);
        assert_eq!(map.role, 1);
        assert_eq!(map.location, Some(2));
        assert_eq!(map.application, Some(3));
        assert_eq!(map.age, Some(4));
    }

    #[test]
    fn tolerates_renamed_headers() {
        let map = resolve(&headers(&["The Company 🏢", "Position Title", "Office Location", "Apply Here", "Posting Age"]));
        assert_eq!(map.company, 0);
        assert_eq!(map.role, 1);
        assert_eq!(map.location, Some(2));
        assert_eq!(map.application, Some(3));
        assert_eq!(map.age, Some(4));
    }

    #[test]
    fn company_and_role_fall_back_to_position() {
        let map = resolve(&headers(&["Org", "Title", "Where", "Link", "Posted"]));
        assert_eq!(map.company, 0);
        assert_eq!(map.role, 1);
        assert_eq!(map.application, None);
        assert_eq!(map.location, None);
        assert_eq!(map.age, None);
    }

    #[test]
    fn reordered_columns_resolve_by_name() {
        let map = resolve(&headers(&["Age", "Location", "Company", "Application", "Role"]));
        assert_eq!(map.age, Some(0));
        assert_eq!(map.location, Some(1));
        assert_eq!(map.company, 2);
        assert_eq!(map.application, Some(3));
        assert_eq!(map.role, 4);
    }
}
