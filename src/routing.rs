// Route matching
// Ordered, first-match-wins resolution of fixture routes

use axum::http::{header, HeaderMap, Method, Uri};

use crate::models::envelope::Shape;

/// Which host a fixture route answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHost {
    /// Mounted under the configured base path, any host.
    Base,
    /// Only requests addressed to this exact host.
    Absolute(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A path template made of literal segments and `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<Segment>,
}

/// Placeholder values bound while matching, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RoutePattern {
    pub fn parse(template: &str) -> Self {
        let segments = split_path(template)
            .into_iter()
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                {
                    Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                    _ => Segment::Literal(segment.to_string()),
                }
            })
            .collect();

        RoutePattern {
            template: template.to_string(),
            segments,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches a concrete path, binding placeholders positionally.
    /// Placeholders never bind an empty segment.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.push((name.clone(), part.to_string()));
                }
                _ => return None,
            }
        }

        Some(PathParams(params))
    }

    /// True when both templates match exactly the same set of paths.
    pub fn same_paths_as(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }
}

// "/a/b/" and "/a/b" split the same; "/" splits to nothing.
fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

pub struct FixtureRoute<R> {
    pub method: Method,
    pub host: RouteHost,
    pub pattern: RoutePattern,
    pub shape: Shape,
    pub responder: R,
}

impl<R> FixtureRoute<R> {
    fn answers_same_requests_as(&self, other: &FixtureRoute<R>) -> bool {
        self.method == other.method
            && self.host == other.host
            && self.pattern.same_paths_as(&other.pattern)
    }
}

/// Outcome of a successful lookup.
pub struct Resolved<'a, R> {
    pub index: usize,
    pub route: &'a FixtureRoute<R>,
    pub params: PathParams,
}

/// A registration that can never win because an earlier one answers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowing {
    pub index: usize,
    pub shadowed_by: usize,
}

/// Routes in declaration order. Lookup is first-match-wins.
pub struct FixtureTable<R> {
    base_path: String,
    routes: Vec<FixtureRoute<R>>,
}

impl<R> FixtureTable<R> {
    pub fn new(base_path: impl Into<String>) -> Self {
        FixtureTable {
            base_path: base_path.into(),
            routes: Vec::new(),
        }
    }

    pub fn on(
        mut self,
        host: RouteHost,
        method: Method,
        template: &str,
        shape: Shape,
        responder: R,
    ) -> Self {
        self.routes.push(FixtureRoute {
            method,
            host,
            pattern: RoutePattern::parse(template),
            shape,
            responder,
        });
        self
    }

    pub fn get(self, template: &str, shape: Shape, responder: R) -> Self {
        self.on(RouteHost::Base, Method::GET, template, shape, responder)
    }

    pub fn post(self, template: &str, shape: Shape, responder: R) -> Self {
        self.on(RouteHost::Base, Method::POST, template, shape, responder)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn routes(&self) -> &[FixtureRoute<R>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn resolve(&self, method: &Method, host: Option<&str>, path: &str) -> Option<Resolved<'_, R>> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.method == *method)
            .find_map(|(index, route)| {
                let local_path = match route.host {
                    RouteHost::Base => self.strip_base_path(path)?,
                    RouteHost::Absolute(expected) => {
                        if !host.is_some_and(|host| host.eq_ignore_ascii_case(expected)) {
                            return None;
                        }
                        path
                    }
                };

                route
                    .pattern
                    .matches(local_path)
                    .map(|params| Resolved { index, route, params })
            })
    }

    pub fn shadowed(&self) -> Vec<Shadowing> {
        self.routes
            .iter()
            .enumerate()
            .filter_map(|(index, route)| {
                self.routes[..index]
                    .iter()
                    .position(|earlier| earlier.answers_same_requests_as(route))
                    .map(|shadowed_by| Shadowing { index, shadowed_by })
            })
            .collect()
    }

    fn strip_base_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base_path.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base_path.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Host the request was addressed to, without port.
/// Absolute-form URIs win over the `Host` header.
pub fn request_host(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(host) = uri.host() {
        return Some(host.to_string());
    }

    let raw = headers.get(header::HOST)?.to_str().ok()?;
    let host = if raw.starts_with('[') {
        // IPv6 literal, keep the brackets
        raw.split_inclusive(']').next().unwrap_or(raw)
    } else {
        raw.split(':').next().unwrap_or(raw)
    };

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn table() -> FixtureTable<&'static str> {
        FixtureTable::new("")
            .get("/crew/{crewId}/detail", Shape::Bare, "detail")
            .get("/crew/ranking/{exerciseId}", Shape::Enveloped, "ranking")
            .get("/crew/{crewId}/battle", Shape::Bare, "battle-first")
            .post("/crew/{crewId}/coin/{coinCount}", Shape::Bare, "coin")
            .get("/crew/{id}/battle", Shape::Bare, "battle-second")
            .on(RouteHost::Absolute("example.com"), Method::GET, "/test", Shape::Bare, "test")
    }

    #[test]
    fn test_pattern_binds_params_positionally() {
        let pattern = RoutePattern::parse("/crew/{crewId}/coin/{coinCount}");
        let params = pattern.matches("/crew/42/coin/100").unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("crewId"), Some("42"));
        assert_eq!(params.get("coinCount"), Some("100"));
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["crewId", "coinCount"]);
    }

    #[test]
    fn test_pattern_rejects_mismatches() {
        let pattern = RoutePattern::parse("/crew/{crewId}/detail");

        assert!(pattern.matches("/crew/1/ranking").is_none());
        assert!(pattern.matches("/crew/1/detail/extra").is_none());
        assert!(pattern.matches("/crew//detail").is_none());
        assert!(pattern.matches("/crew/1/detail/").is_some());
    }

    #[test]
    fn test_params_are_opaque_strings() {
        let pattern = RoutePattern::parse("/users/{userId}/crew-list");
        let params = pattern.matches("/users/not-a-number/crew-list").unwrap();
        assert_eq!(params.get("userId"), Some("not-a-number"));
    }

    #[test]
    fn test_first_declared_route_wins() {
        let table = table();

        // Both detail and ranking patterns fit; detail is declared first.
        let resolved = table.resolve(&Method::GET, None, "/crew/ranking/detail").unwrap();
        assert_eq!(resolved.route.responder, "detail");
        assert_eq!(resolved.params.get("crewId"), Some("ranking"));

        let resolved = table.resolve(&Method::GET, None, "/crew/7/battle").unwrap();
        assert_eq!(resolved.index, 2);
        assert_eq!(resolved.route.responder, "battle-first");
    }

    #[test]
    fn test_method_must_match() {
        let table = table();
        assert!(table.resolve(&Method::POST, None, "/crew/1/detail").is_none());
        assert!(table.resolve(&Method::GET, None, "/crew/1/coin/5").is_none());
    }

    #[test]
    fn test_absolute_routes_require_host() {
        let table = table();

        assert!(table.resolve(&Method::GET, None, "/test").is_none());
        assert!(table.resolve(&Method::GET, Some("localhost"), "/test").is_none());

        let resolved = table.resolve(&Method::GET, Some("Example.com"), "/test").unwrap();
        assert_eq!(resolved.route.responder, "test");
    }

    #[test]
    fn test_base_path_is_stripped() {
        let table = FixtureTable::new("/api").get("/users/body", Shape::Enveloped, "body");

        assert!(table.resolve(&Method::GET, None, "/api/users/body").is_some());
        assert!(table.resolve(&Method::GET, None, "/users/body").is_none());
        assert!(table.resolve(&Method::GET, None, "/apiusers/body").is_none());
    }

    #[test]
    fn test_shadowed_registrations_are_reported() {
        let shadowed = table().shadowed();
        assert_eq!(shadowed, vec![Shadowing { index: 4, shadowed_by: 2 }]);
    }

    #[test]
    fn test_request_host_prefers_absolute_uri() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));

        let absolute: Uri = "https://example.com/test".parse().unwrap();
        assert_eq!(request_host(&absolute, &headers).as_deref(), Some("example.com"));

        let relative: Uri = "/test".parse().unwrap();
        assert_eq!(request_host(&relative, &headers).as_deref(), Some("localhost"));

        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));
        assert_eq!(request_host(&relative, &headers).as_deref(), Some("[::1]"));

        assert_eq!(request_host(&relative, &HeaderMap::new()), None);
    }
}
