pub const MAX_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn css_class(&self) -> &'static str {
        match self {
            Star::Full => "star-full",
            Star::Half => "star-half",
            Star::Empty => "star-empty",
        }
    }
}

/// Five stars for a rating: one full star per whole point, a half star when
/// the remainder is at least .5, empty stars for the rest.
pub fn rating_stars(rating: f64) -> Vec<Star> {
    let rating = rating.clamp(0.0, MAX_STARS as f64);
    let full = rating.floor() as usize;
    let half = full < MAX_STARS && rating - rating.floor() >= 0.5;

    let mut stars = vec![Star::Full; full];
    if half {
        stars.push(Star::Half);
    }
    stars.resize(MAX_STARS, Star::Empty);
    stars
}
