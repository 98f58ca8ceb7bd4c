//! Department map geometry.
//!
//! A static table of simplified department outlines in a 1000 × 800 SVG
//! viewbox. Regions are hit-tested with even-odd ray casting so a click
//! position can be resolved to a department page. Slugs must match the
//! seeded `departments` rows.

/// Width of the map viewbox.
pub const VIEWBOX_WIDTH: f64 = 1000.0;

/// Height of the map viewbox.
pub const VIEWBOX_HEIGHT: f64 = 800.0;

/// One department outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub slug: &'static str,
    pub name: &'static str,
    pub capital: &'static str,
    pub points: &'static [(f64, f64)],
}

static REGIONS: [MapRegion; 10] = [
    MapRegion {
        slug: "nord-ouest",
        name: "Nord-Ouest",
        capital: "Port-de-Paix",
        points: &[(150.0, 120.0), (400.0, 100.0), (400.0, 300.0), (300.0, 300.0), (180.0, 260.0)],
    },
    MapRegion {
        slug: "nord",
        name: "Nord",
        capital: "Cap-Haïtien",
        points: &[(400.0, 100.0), (620.0, 120.0), (620.0, 300.0), (400.0, 300.0)],
    },
    MapRegion {
        slug: "nord-est",
        name: "Nord-Est",
        capital: "Fort-Liberté",
        points: &[(620.0, 120.0), (800.0, 130.0), (820.0, 330.0), (620.0, 300.0)],
    },
    MapRegion {
        slug: "artibonite",
        name: "Artibonite",
        capital: "Gonaïves",
        points: &[(300.0, 300.0), (620.0, 300.0), (620.0, 470.0), (380.0, 470.0), (320.0, 400.0)],
    },
    MapRegion {
        slug: "centre",
        name: "Centre",
        capital: "Hinche",
        points: &[(620.0, 300.0), (820.0, 330.0), (830.0, 520.0), (620.0, 470.0)],
    },
    MapRegion {
        slug: "ouest",
        name: "Ouest",
        capital: "Port-au-Prince",
        points: &[
            (380.0, 470.0),
            (620.0, 470.0),
            (830.0, 520.0),
            (830.0, 620.0),
            (500.0, 620.0),
            (450.0, 560.0),
        ],
    },
    MapRegion {
        slug: "sud-est",
        name: "Sud-Est",
        capital: "Jacmel",
        points: &[(500.0, 620.0), (830.0, 620.0), (820.0, 720.0), (520.0, 720.0)],
    },
    MapRegion {
        slug: "nippes",
        name: "Nippes",
        capital: "Miragoâne",
        points: &[(300.0, 560.0), (450.0, 560.0), (500.0, 620.0), (420.0, 660.0), (300.0, 650.0)],
    },
    MapRegion {
        slug: "grand-anse",
        name: "Grand'Anse",
        capital: "Jérémie",
        points: &[(20.0, 520.0), (300.0, 520.0), (300.0, 650.0), (200.0, 680.0), (40.0, 620.0)],
    },
    MapRegion {
        slug: "sud",
        name: "Sud",
        capital: "Les Cayes",
        points: &[
            (200.0, 680.0),
            (300.0, 650.0),
            (420.0, 660.0),
            (500.0, 620.0),
            (520.0, 720.0),
            (250.0, 750.0),
        ],
    },
];

/// Every department region.
pub fn regions() -> &'static [MapRegion] {
    &REGIONS
}

/// Look up a region by department slug.
pub fn find(slug: &str) -> Option<&'static MapRegion> {
    REGIONS.iter().find(|r| r.slug == slug)
}

/// The department whose outline contains the point, if any.
pub fn department_at(x: f64, y: f64) -> Option<&'static MapRegion> {
    REGIONS.iter().find(|r| r.contains(x, y))
}

impl MapRegion {
    /// Even-odd point-in-polygon test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let pts = self.points;
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (xi, yi) = pts[i];
            let (xj, yj) = pts[j];
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// SVG path data (`M x,y L x,y ... Z`).
    pub fn svg_path(&self) -> String {
        let mut d = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            d.push_str(if i == 0 { "M" } else { " L" });
            d.push_str(&format!("{x},{y}"));
        }
        d.push_str(" Z");
        d
    }

    /// Vertex average, used to place the label.
    pub fn label_point(&self) -> (f64, f64) {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        (sx / n, sy / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::validate_slug;

    #[test]
    fn ten_departments_with_valid_slugs() {
        assert_eq!(regions().len(), 10);
        for r in regions() {
            assert!(validate_slug(r.slug).is_ok(), "{}", r.slug);
            assert!(r.points.len() >= 3);
        }
    }

    #[test]
    fn hit_test_resolves_known_cities() {
        assert_eq!(department_at(600.0, 550.0).map(|r| r.slug), Some("ouest"));
        assert_eq!(department_at(500.0, 200.0).map(|r| r.slug), Some("nord"));
        assert_eq!(department_at(650.0, 680.0).map(|r| r.slug), Some("sud-est"));
        assert_eq!(department_at(350.0, 700.0).map(|r| r.slug), Some("sud"));
        assert_eq!(department_at(100.0, 570.0).map(|r| r.slug), Some("grand-anse"));
        assert_eq!(department_at(720.0, 420.0).map(|r| r.slug), Some("centre"));
    }

    #[test]
    fn sea_is_not_a_department() {
        assert!(department_at(950.0, 50.0).is_none());
        assert!(department_at(-10.0, 400.0).is_none());
    }

    #[test]
    fn label_points_fall_inside_their_region() {
        for r in regions() {
            let (x, y) = r.label_point();
            assert!(r.contains(x, y), "label for {} is outside", r.slug);
        }
    }

    #[test]
    fn svg_path_is_closed() {
        let nord = find("nord").unwrap();
        assert_eq!(nord.svg_path(), "M400,100 L620,120 L620,300 L400,300 Z");
        assert!(find("atlantis").is_none());
    }
}
