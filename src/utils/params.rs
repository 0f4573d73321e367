use crate::utils::error::ApiError;

/// `?limit=` is shared by both data endpoints but means different things.
#[derive(Default)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    /// Picks the first `limit` out of the raw query pairs; repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs.into_iter().find(|(k, _)| k == "limit").map(|(_, v)| v);
        Self { limit }
    }

    fn raw(&self) -> Option<&str> {
        self.limit.as_deref().filter(|s| !s.is_empty())
    }

    /// City cap for the info endpoint. Zero or negative means "all cities".
    pub fn city_limit(&self) -> Result<i64, ApiError> {
        match self.raw() {
            None => Ok(0),
            Some(s) => s
                .parse::<i64>()
                .map_err(|_| ApiError::BadRequest("Invalid limit parameter".into())),
        }
    }

    /// Inclusive `YYYY-YYYY` range for the population endpoint.
    pub fn year_range(&self) -> Result<Option<(i64, i64)>, ApiError> {
        let Some(s) = self.raw() else {
            return Ok(None);
        };
        let parts: Vec<&str> = s.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(ApiError::BadRequest(
                "limit parameter must be in format YYYY-YYYY".into(),
            ));
        };
        match (start.parse::<i64>(), end.parse::<i64>()) {
            (Ok(a), Ok(b)) => Ok(Some((a, b))),
            _ => Err(ApiError::BadRequest(
                "Invalid year range in limit parameter".into(),
            )),
        }
    }
}

/// Trimmed, lower-cased country code; missing or blank is a 400.
pub fn country_code(raw: Option<String>) -> Result<String, ApiError> {
    raw.map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Country code not provided".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> LimitParams {
        LimitParams { limit: Some(s.to_string()) }
    }

    #[test]
    fn city_limit_parses_integers_and_rejects_garbage() {
        assert_eq!(LimitParams::default().city_limit().unwrap(), 0);
        assert_eq!(p("").city_limit().unwrap(), 0);
        assert_eq!(p("5").city_limit().unwrap(), 5);
        assert_eq!(p("-3").city_limit().unwrap(), -3);
        let err = p("abc").city_limit().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Invalid limit parameter"));
        assert!(p("2.5").city_limit().is_err());
    }

    #[test]
    fn year_range_accepts_two_integers() {
        assert_eq!(LimitParams::default().year_range().unwrap(), None);
        assert_eq!(p("2000-2001").year_range().unwrap(), Some((2000, 2001)));
        // reversed bounds parse fine and simply match nothing later
        assert_eq!(p("2010-2000").year_range().unwrap(), Some((2010, 2000)));
    }

    #[test]
    fn year_range_rejects_malformed_input() {
        for bad in ["2000", "2000-abc", "abc-2000", "2000-2001-2002", "-2000", "2000-"] {
            assert!(
                matches!(p(bad).year_range(), Err(ApiError::BadRequest(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn first_limit_wins() {
        let pairs = vec![
            ("other".to_string(), "x".to_string()),
            ("limit".to_string(), "3".to_string()),
            ("limit".to_string(), "abc".to_string()),
        ];
        assert_eq!(LimitParams::from_pairs(pairs).city_limit().unwrap(), 3);
        assert!(LimitParams::from_pairs(vec![]).limit.is_none());
    }

    #[test]
    fn country_code_is_normalized() {
        assert_eq!(country_code(Some(" NO ".into())).unwrap(), "no");
        assert!(country_code(Some("  ".into())).is_err());
        assert!(country_code(None).is_err());
    }
}
