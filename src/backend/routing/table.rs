//! The BWLP route table.

use super::RoutingError;
use super::guard::EntryGuard;
use super::pattern::{Params, PathPattern, normalize_path};
use serde::Serialize;
use std::collections::HashSet;

/// Views a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    Login,
    ImageList,
    ImageCreate,
    ImageEdit,
    LectureList,
    LectureCreate,
    LectureEdit,
    LectureDuplicate,
    UserAgreement,
    PrivacyPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub title: Option<&'static str>,
}

/// Declarative route definition. Children use absolute paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: Option<ViewKind>,
    /// Path parameters are handed to the view as props.
    pub props: bool,
    pub meta: RouteMeta,
    pub entry_guard: Option<EntryGuard>,
    pub redirect: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            view: None,
            props: false,
            meta: RouteMeta::default(),
            entry_guard: None,
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn view(mut self, view: ViewKind) -> Self {
        self.view = Some(view);
        self
    }

    pub fn props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.meta.title = Some(title);
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn guard(mut self, guard: EntryGuard) -> Self {
        self.entry_guard = Some(guard);
        self
    }

    pub fn redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    pub fn children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }
}

/// A descriptor flattened out of the tree, pointing at its parent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: &'static str,
    pub path: &'static str,
    pub view: Option<ViewKind>,
    pub props: bool,
    pub meta: RouteMeta,
    pub entry_guard: Option<EntryGuard>,
    pub redirect: Option<&'static str>,
    pub parent: Option<usize>,
}

/// A URL resolved against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path that was matched.
    pub path: String,
    pub params: Params,
    /// Matched records from the outermost parent down to the leaf.
    pub matched: Vec<RouteRecord>,
}

impl ResolvedRoute {
    pub fn leaf(&self) -> &RouteRecord {
        // `RouteTable::resolve` never builds an empty chain.
        &self.matched[self.matched.len() - 1]
    }

    pub fn name(&self) -> &'static str {
        self.leaf().name
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The leaf's declared path with captured parameters filled in, so
    /// static segments keep the casing of the table.
    pub fn canonical_path(&self) -> String {
        let mut path = String::new();
        for segment in self.leaf().path.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            match segment.strip_prefix(':') {
                Some(param) => {
                    let name = param.split('(').next().unwrap_or(param);
                    path.push_str(self.param(name).unwrap_or_default());
                }
                None => path.push_str(segment),
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }
}

#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    records: Vec<RouteRecord>,
    /// Record indices paired with their patterns, most specific first.
    patterns: Vec<(PathPattern, usize)>,
}

impl RouteTable {
    /// Builds a table, rejecting duplicate names and malformed patterns.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RoutingError> {
        let mut records = Vec::new();
        for route in &routes {
            flatten_into(route, None, &mut records);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name) {
                return Err(RoutingError::DuplicateRouteName(record.name.to_string()));
            }
        }

        let mut patterns = records
            .iter()
            .enumerate()
            .map(|(idx, record)| Ok((PathPattern::compile(record.path)?, idx)))
            .collect::<Result<Vec<_>, RoutingError>>()?;
        // Stable sort keeps declaration order between equally specific patterns.
        patterns.sort_by(|(a, _), (b, _)| a.specificity(b));

        Ok(Self {
            routes,
            records,
            patterns,
        })
    }

    /// The application's routes.
    pub fn bwlp() -> Result<Self, RoutingError> {
        use ViewKind::*;

        Self::new(vec![
            RouteDescriptor::new("/", "Root").guard(EntryGuard::RootLanding),
            RouteDescriptor::new("/login", "Login")
                .view(Login)
                .title("Login")
                .guard(EntryGuard::LoginScreen),
            RouteDescriptor::new("/image", "ImageList")
                .view(ImageList)
                .requires_auth()
                .title("Image List")
                .children(vec![
                    RouteDescriptor::new("/image/create", "ImageCreate")
                        .view(ImageCreate)
                        .requires_auth()
                        .title("Create Image"),
                    RouteDescriptor::new("/image/:id", "ImageDetail")
                        .view(ImageList)
                        .props()
                        .requires_auth()
                        .title("Image Detail"),
                    RouteDescriptor::new("/image/:id/edit", "ImageEdit")
                        .view(ImageEdit)
                        .props()
                        .requires_auth()
                        .title("Edit Image"),
                ]),
            RouteDescriptor::new("/lecture", "LectureList")
                .view(LectureList)
                .requires_auth()
                .title("Lecture List")
                .children(vec![
                    RouteDescriptor::new("/lecture/create", "LectureCreate")
                        .view(LectureCreate)
                        .requires_auth()
                        .title("Create Lecture"),
                    RouteDescriptor::new("/lecture/:id", "LectureDetail")
                        .view(LectureList)
                        .props()
                        .requires_auth()
                        .title("Lecture Detail"),
                    RouteDescriptor::new("/lecture/:id/edit", "LectureEdit")
                        .view(LectureEdit)
                        .props()
                        .requires_auth()
                        .title("Edit Lecture"),
                    RouteDescriptor::new("/lecture/:id/duplicate", "LectureDuplicate")
                        .view(LectureDuplicate)
                        .props()
                        .requires_auth()
                        .title("Duplicate Lecture"),
                ]),
            RouteDescriptor::new("/user-agreement", "UserAgreementView")
                .view(UserAgreement)
                .requires_auth()
                .title("User Agreement"),
            RouteDescriptor::new("/privacy-policy", "PrivacyPolicyView")
                .view(PrivacyPolicy)
                .requires_auth()
                .title("Privacy Policy"),
            RouteDescriptor::new("/:pathMatch(.*)*", "CatchAll").redirect("/image"),
        ])
    }

    /// Route tree as declared.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Every route, parents before their children, in declaration order.
    pub fn flatten(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Resolves a URL to the single most specific matching route.
    pub fn resolve(&self, url: &str) -> Result<ResolvedRoute, RoutingError> {
        let path = normalize_path(url);

        let (params, idx) = self
            .patterns
            .iter()
            .find_map(|(pattern, idx)| pattern.captures(&path).map(|params| (params, *idx)))
            .ok_or_else(|| RoutingError::UnknownRoute(path.clone()))?;

        let mut matched = Vec::new();
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            let record = &self.records[current];
            matched.push(record.clone());
            cursor = record.parent;
        }
        matched.reverse();

        Ok(ResolvedRoute {
            path,
            params,
            matched,
        })
    }
}

fn flatten_into(route: &RouteDescriptor, parent: Option<usize>, out: &mut Vec<RouteRecord>) {
    let idx = out.len();
    out.push(RouteRecord {
        name: route.name,
        path: route.path,
        view: route.view,
        props: route.props,
        meta: route.meta.clone(),
        entry_guard: route.entry_guard,
        redirect: route.redirect,
        parent,
    });
    for child in &route.children {
        flatten_into(child, Some(idx), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::bwlp().unwrap()
    }

    #[test]
    fn exposes_the_full_url_surface() {
        let paths: Vec<_> = table().flatten().iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            [
                "/",
                "/login",
                "/image",
                "/image/create",
                "/image/:id",
                "/image/:id/edit",
                "/lecture",
                "/lecture/create",
                "/lecture/:id",
                "/lecture/:id/edit",
                "/lecture/:id/duplicate",
                "/user-agreement",
                "/privacy-policy",
                "/:pathMatch(.*)*",
            ]
        );
    }

    #[test]
    fn route_names_are_unique() {
        let table = table();
        let names: HashSet<_> = table.flatten().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), table.flatten().len());
    }

    #[test]
    fn duplicate_names_are_rejected_even_when_nested() {
        let result = RouteTable::new(vec![
            RouteDescriptor::new("/image", "Image")
                .children(vec![RouteDescriptor::new("/image/:id", "Image")]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RoutingError::DuplicateRouteName("Image".to_string())
        );
    }

    #[test]
    fn resolves_every_declared_route() {
        let table = table();
        let cases = [
            ("/", "Root"),
            ("/login", "Login"),
            ("/image", "ImageList"),
            ("/image/create", "ImageCreate"),
            ("/image/7", "ImageDetail"),
            ("/image/7/edit", "ImageEdit"),
            ("/lecture", "LectureList"),
            ("/lecture/create", "LectureCreate"),
            ("/lecture/42", "LectureDetail"),
            ("/lecture/42/edit", "LectureEdit"),
            ("/lecture/42/duplicate", "LectureDuplicate"),
            ("/user-agreement", "UserAgreementView"),
            ("/privacy-policy", "PrivacyPolicyView"),
        ];
        for (url, name) in cases {
            assert_eq!(table.resolve(url).unwrap().name(), name, "{url}");
        }
    }

    #[test]
    fn unmatched_urls_fall_through_to_the_catch_all() {
        let table = table();
        for url in ["/nope", "/image/1/2/3", "/lecture/1/delete", "/settings?x=1"] {
            let route = table.resolve(url).unwrap();
            assert_eq!(route.name(), "CatchAll", "{url}");
            assert_eq!(route.leaf().redirect, Some("/image"));
        }
    }

    #[test]
    fn children_carry_their_parent_in_the_chain() {
        let route = table().resolve("/lecture/42/edit").unwrap();
        let chain: Vec<_> = route.matched.iter().map(|r| r.name).collect();
        assert_eq!(chain, ["LectureList", "LectureEdit"]);
        assert_eq!(route.param("id"), Some("42"));
    }

    #[test]
    fn detail_routes_reuse_the_list_view_with_props() {
        let table = table();
        let image = table.find_by_name("ImageDetail").unwrap();
        let lecture = table.find_by_name("LectureDetail").unwrap();
        assert_eq!((image.view, image.props), (Some(ViewKind::ImageList), true));
        assert_eq!((lecture.view, lecture.props), (Some(ViewKind::LectureList), true));
    }

    #[test]
    fn create_is_not_mistaken_for_an_id() {
        let route = table().resolve("/image/create").unwrap();
        assert_eq!(route.name(), "ImageCreate");
        assert!(route.params.is_empty());
    }

    #[test]
    fn canonical_paths_use_declared_casing() {
        let table = table();
        let cases = [
            ("/Image", "/image"),
            ("/LECTURE/Ab7/Edit/", "/lecture/Ab7/edit"),
            ("/privacy-policy?from=login", "/privacy-policy"),
            ("/", "/"),
        ];
        for (url, canonical) in cases {
            assert_eq!(table.resolve(url).unwrap().canonical_path(), canonical, "{url}");
        }
    }

    #[test]
    fn resolution_without_a_catch_all_can_fail() {
        let table = RouteTable::new(vec![RouteDescriptor::new("/login", "Login")]).unwrap();
        assert_eq!(
            table.resolve("/elsewhere").unwrap_err(),
            RoutingError::UnknownRoute("/elsewhere".to_string())
        );
    }

    #[test]
    fn route_tree_serializes_for_diagnostics() {
        let json = serde_json::to_value(table().routes()).unwrap();
        assert_eq!(json[2]["children"][1]["path"], "/image/:id");
        assert_eq!(json[2]["children"][1]["meta"]["title"], "Image Detail");
        assert!(json[0].get("children").is_none());
    }
}
