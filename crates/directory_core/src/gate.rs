/// Sequence number handed out by a [`RequestGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Stale-response guard for one logical request slot.
///
/// Every `begin` supersedes all earlier tokens. In-flight calls are left to
/// run; their results are dropped when they no longer hold the current token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestGate {
    current: u64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }

    /// The most recently minted token, if any.
    pub fn current(&self) -> Option<RequestToken> {
        (self.current > 0).then_some(RequestToken(self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGate;

    #[test]
    fn fresh_gate_has_no_current_token() {
        assert_eq!(RequestGate::new().current(), None);
    }

    #[test]
    fn later_token_supersedes_earlier() {
        let mut gate = RequestGate::new();
        let a = gate.begin();
        let b = gate.begin();

        assert!(a < b);
        assert!(gate.is_current(b));
        assert!(!gate.is_current(a));
        assert_eq!(gate.current(), Some(b));
    }

    #[test]
    fn out_of_order_resolution_only_accepts_latest() {
        let mut gate = RequestGate::new();
        let a = gate.begin();
        let b = gate.begin();

        let mut applied = Vec::new();
        for token in [b, a] {
            if gate.is_current(token) {
                applied.push(token);
            }
        }
        assert_eq!(applied, vec![b]);
    }
}
