const OPEN: &str = "@PrismaSelect.map([";
const CLOSE: &str = "])";

/// A `@PrismaSelect.map([Name1, Name2])` annotation found in a model's
/// documentation.
///
/// Only the first well-formed annotation in a documentation string is
/// honored. An annotation whose name list does not close on the same line is
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapAnnotation<'a> {
    list: &'a str,
}

impl<'a> MapAnnotation<'a> {
    pub fn parse(documentation: &'a str) -> Option<Self> {
        documentation.match_indices(OPEN).find_map(|(start, _)| {
            let rest = &documentation[start + OPEN.len()..];
            let line = rest.split('\n').next().unwrap_or(rest);
            let end = line.find(CLOSE)?;

            Some(Self {
                list: &line[..end],
            })
        })
    }

    /// Mapped names, trimmed, with empty entries skipped.
    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|mapped| mapped == name)
    }
}
