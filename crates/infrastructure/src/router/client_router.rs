use super::status::UpstreamStatus;
use rdns_router_application::ControlStatePort;
use rdns_router_domain::Request;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_GROUP_NAME: &str = "default";

/// Maps a request's client identity to the candidates that should serve it
/// (§4.2, C3). Built once at construction; read on every query.
pub struct ClientRouter {
    resolvers_per_client: HashMap<Arc<str>, Vec<Arc<UpstreamStatus>>>,
    control: Arc<dyn ControlStatePort>,
}

impl ClientRouter {
    pub fn new(
        resolvers_per_client: HashMap<Arc<str>, Vec<Arc<UpstreamStatus>>>,
        control: Arc<dyn ControlStatePort>,
    ) -> Self {
        Self {
            resolvers_per_client,
            control,
        }
    }

    /// Never empty for a request that arrived via a configured front-end,
    /// because `"default"` is guaranteed non-empty by the constructor.
    pub async fn resolvers_for(&self, request: &Request) -> Vec<Arc<UpstreamStatus>> {
        let status = self.control.status().await;
        let mut result = Vec::new();

        let active_names = request
            .client_names
            .iter()
            .filter(|name| !status.disabled_groups.iter().any(|g| group_name_matches(g, name)));

        for name in active_names {
            for (group, upstreams) in &self.resolvers_per_client {
                if group_name_matches(group, name) {
                    result.extend(upstreams.iter().cloned());
                }
            }
        }

        let ip_key = request.client_ip.to_string();
        if let Some(upstreams) = self.resolvers_per_client.get(ip_key.as_str()) {
            result.extend(upstreams.iter().cloned());
        }

        for (key, upstreams) in &self.resolvers_per_client {
            if !key.contains('/') {
                continue;
            }
            if let Ok(network) = key.parse::<ipnetwork::IpNetwork>() {
                if network.contains(request.client_ip) {
                    result.extend(upstreams.iter().cloned());
                }
            }
        }

        if result.is_empty() {
            if let Some(default) = self.resolvers_per_client.get(DEFAULT_GROUP_NAME) {
                result.extend(default.iter().cloned());
            }
        }

        result
    }
}

/// Case-insensitive equality, or a shell-style glob when `pattern` contains
/// `*` (§4.2).
pub fn group_name_matches(pattern: &str, name: &str) -> bool {
    if pattern.contains('*') {
        let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
        let text: Vec<char> = name.to_lowercase().chars().collect();
        glob_match(&pattern, &text)
    } else {
        pattern.eq_ignore_ascii_case(name)
    }
}

/// Two-pointer wildcard match, `*` only (no `?`). Linear in `text.len()`.
fn glob_match(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut match_from = 0usize;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '*' || pattern[p] == text[t]) {
            if pattern[p] == '*' {
                star = Some(p);
                match_from = t;
                p += 1;
            } else {
                p += 1;
                t += 1;
            }
        } else if let Some(s) = star {
            p = s + 1;
            match_from += 1;
            t = match_from;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockUpstream;
    use rdns_router_application::ControlStatePort;
    use rdns_router_domain::{ControlStatusSnapshot, DisableGroups, RouterError};
    use std::net::IpAddr;
    use std::str::FromStr;
    use std::time::Duration;

    struct FixedControl(ControlStatusSnapshot);

    #[async_trait::async_trait]
    impl ControlStatePort for FixedControl {
        async fn enable(&self) {}
        async fn disable(&self, _: Duration, _: DisableGroups) -> Result<(), RouterError> {
            Ok(())
        }
        async fn status(&self) -> ControlStatusSnapshot {
            self.0.clone()
        }
    }

    fn enabled_control() -> Arc<dyn ControlStatePort> {
        Arc::new(FixedControl(ControlStatusSnapshot {
            enabled: true,
            disabled_groups: Vec::new(),
            auto_enable_in_sec: 0,
        }))
    }

    fn group(name: &str) -> Vec<Arc<UpstreamStatus>> {
        vec![Arc::new(UpstreamStatus::new(Arc::new(MockUpstream::always_ok(name))))]
    }

    fn request(ip: &str, names: Vec<&str>) -> Request {
        Request::new(
            IpAddr::from_str(ip).unwrap(),
            names.into_iter().map(Arc::from).collect(),
            Arc::from(Vec::new().into_boxed_slice()),
        )
    }

    #[test]
    fn glob_matches_shell_style() {
        assert!(group_name_matches("laptop-*", "laptop-01"));
        assert!(!group_name_matches("laptop-*", "desktop-01"));
        assert!(group_name_matches("*", "anything"));
        assert!(group_name_matches("Default", "default"));
    }

    #[tokio::test]
    async fn falls_back_to_default_with_no_match() {
        let mut map = HashMap::new();
        map.insert(Arc::from(DEFAULT_GROUP_NAME), group("default"));
        let router = ClientRouter::new(map, enabled_control());

        let result = router.resolvers_for(&request("192.0.2.5", vec![])).await;
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn ip_literal_overrides_default() {
        let mut map = HashMap::new();
        map.insert(Arc::from(DEFAULT_GROUP_NAME), group("default"));
        map.insert(Arc::from("192.0.2.7"), group("override"));
        let router = ClientRouter::new(map, enabled_control());

        let result = router.resolvers_for(&request("192.0.2.7", vec![])).await;
        assert_eq!(result.len(), 1);
        assert!(result[0].upstream.display().as_ref() == "override");
    }

    #[tokio::test]
    async fn cidr_override_matches_containing_network() {
        let mut map = HashMap::new();
        map.insert(Arc::from(DEFAULT_GROUP_NAME), group("default"));
        map.insert(Arc::from("10.0.0.0/8"), group("lan"));
        let router = ClientRouter::new(map, enabled_control());

        let result = router.resolvers_for(&request("10.1.2.3", vec![])).await;
        assert_eq!(result.len(), 1);
        assert!(result[0].upstream.display().as_ref() == "lan");
    }

    #[tokio::test]
    async fn disabled_group_is_filtered_from_client_name_match() {
        let mut map = HashMap::new();
        map.insert(Arc::from(DEFAULT_GROUP_NAME), group("default"));
        map.insert(Arc::from("kids"), group("kids-upstream"));
        let control: Arc<dyn ControlStatePort> = Arc::new(FixedControl(ControlStatusSnapshot {
            enabled: false,
            disabled_groups: vec![Arc::from("kids")],
            auto_enable_in_sec: 10,
        }));
        let router = ClientRouter::new(map, control);

        let result = router
            .resolvers_for(&request("192.0.2.5", vec!["kids"]))
            .await;
        assert_eq!(result.len(), 1);
        assert!(result[0].upstream.display().as_ref() == "default");
    }
}
