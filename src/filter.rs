use std::borrow::Cow;

/// How a field's values are compared with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// Both sides lower-cased before the substring check.
    CaseInsensitive,
    /// The raw query against the raw value.
    Exact,
}

pub type Extractor<T> = for<'a> fn(&'a T) -> Vec<Cow<'a, str>>;

/// One searchable field of `T`. A field may yield several values (e.g. tags);
/// it matches when any of them does.
pub struct Field<T> {
    matching: Matching,
    extract: Extractor<T>,
}

impl<T> Field<T> {
    pub const fn text(extract: Extractor<T>) -> Self {
        Self {
            matching: Matching::CaseInsensitive,
            extract,
        }
    }

    pub const fn exact(extract: Extractor<T>) -> Self {
        Self {
            matching: Matching::Exact,
            extract,
        }
    }

    fn matches(&self, query: &Query<'_>, item: &T) -> bool {
        (self.extract)(item)
            .iter()
            .any(|value| query.found_in(self.matching, value))
    }
}

struct Query<'q> {
    raw: &'q str,
    folded: String,
}

impl<'q> Query<'q> {
    fn new(raw: &'q str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    fn found_in(&self, matching: Matching, value: &str) -> bool {
        match matching {
            Matching::CaseInsensitive => value.to_lowercase().contains(&self.folded),
            Matching::Exact => value.contains(self.raw),
        }
    }
}

/// Items for which at least one field contains `query`, in their original
/// order. An empty query keeps everything.
pub fn filter<'a, T, I>(query: &str, items: I, fields: &[Field<T>]) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.is_empty() {
        return items.into_iter().collect();
    }
    let query = Query::new(query);
    items
        .into_iter()
        .filter(|item| fields.iter().any(|field| field.matches(&query, item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        labels: Vec<&'static str>,
        code: u32,
    }

    fn name(e: &Entry) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(e.name)]
    }

    fn labels(e: &Entry) -> Vec<Cow<'_, str>> {
        e.labels.iter().map(|l| Cow::Borrowed(*l)).collect()
    }

    fn code(e: &Entry) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(e.code.to_string())]
    }

    const FIELDS: [Field<Entry>; 3] = [Field::text(name), Field::text(labels), Field::exact(code)];

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                name: "Alpha Report",
                labels: vec!["SQL", "Excel"],
                code: 2021,
            },
            Entry {
                name: "Beta Dashboard",
                labels: vec!["Python", "Power BI"],
                code: 2023,
            },
            Entry {
                name: "Gamma Model",
                labels: vec!["python", "NLP"],
                code: 1999,
            },
            Entry {
                name: "ÉCOLE Notes",
                labels: vec![],
                code: 42,
            },
        ]
    }

    fn names(found: &[&Entry]) -> Vec<&'static str> {
        found.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = entries();
        let found = filter("", &items, &FIELDS);
        assert_eq!(found, items.iter().collect::<Vec<_>>());

        let found = filter("", &items, &[]);
        assert_eq!(found.len(), items.len());
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Entry> = Vec::new();
        assert!(filter("alpha", &items, &FIELDS).is_empty());
        assert!(filter("", &items, &FIELDS).is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let items = entries();
        assert_eq!(names(&filter("REPORT", &items, &FIELDS)), ["Alpha Report"]);
        assert_eq!(names(&filter("dash", &items, &FIELDS)), ["Beta Dashboard"]);
        assert_eq!(names(&filter("ha r", &items, &FIELDS)), ["Alpha Report"]);
        assert_eq!(names(&filter("école", &items, &FIELDS)), ["ÉCOLE Notes"]);
    }

    #[test]
    fn test_any_multi_valued_field_matches() {
        let items = entries();
        assert_eq!(
            names(&filter("PYTHON", &items, &FIELDS)),
            ["Beta Dashboard", "Gamma Model"]
        );
        assert_eq!(names(&filter("bi", &items, &FIELDS)), ["Beta Dashboard"]);
    }

    #[test]
    fn test_exact_field_uses_raw_query() {
        let items = entries();
        assert_eq!(names(&filter("202", &items, &FIELDS)), ["Alpha Report", "Beta Dashboard"]);
        assert_eq!(names(&filter("99", &items, &FIELDS)), ["Gamma Model"]);
        assert_eq!(names(&filter("42", &items, &FIELDS)), ["ÉCOLE Notes"]);
        assert_eq!(FIELDS[2].matching, Matching::Exact);
    }

    #[test]
    fn test_no_match() {
        let items = entries();
        assert!(filter("xyz", &items, &FIELDS).is_empty());
        assert!(filter("2024", &items, &FIELDS).is_empty());
    }

    #[test]
    fn test_results_are_ordered_subsequence() {
        let items = entries();
        for q in ["", "a", "o", "2", "python", "sql", "e", "zz"] {
            let found = filter(q, &items, &FIELDS);
            let mut source = items.iter();
            for hit in &found {
                assert!(
                    source.any(|item| std::ptr::eq(item, *hit)),
                    "{q:?} broke source order"
                );
            }
        }
    }

    #[test]
    fn test_every_result_matches_some_field() {
        let items = entries();
        for q in ["a", "Po", "20", "notes", "l"] {
            let folded = q.to_lowercase();
            for hit in filter(q, &items, &FIELDS) {
                let text_hit = std::iter::once(hit.name)
                    .chain(hit.labels.iter().copied())
                    .any(|v| v.to_lowercase().contains(&folded));
                let code_hit = hit.code.to_string().contains(q);
                assert!(text_hit || code_hit, "{q:?} matched {:?}", hit.name);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let items = entries();
        for q in ["", "a", "python", "202", "missing"] {
            let once = filter(q, &items, &FIELDS);
            let twice = filter(q, once.iter().copied(), &FIELDS);
            assert_eq!(once, twice);
        }
    }
}
