use bevy::math::Vec3;

/// Which description template a body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Sun,
    Planet,
    Moon,
}

/// Camera placement relative to the focused body's scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraOffset {
    /// Only the X component is replaced, Y and Z keep their current values.
    AxisX(f32),
    /// The whole local position is replaced.
    Position(Vec3),
}

impl CameraOffset {
    /// Apply the offset to the camera's current local translation.
    pub fn apply(self, current: Vec3) -> Vec3 {
        match self {
            Self::AxisX(x) => Vec3::new(x, current.y, current.z),
            Self::Position(position) => position,
        }
    }
}

/// Literal facts shown in a body's description panel.
/// Fields a template does not use are left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyFacts {
    pub diameter: &'static str,
    pub mass: &'static str,
    pub moons: &'static str,
    pub orbit_distance: &'static str,
    pub orbit_period: &'static str,
    pub temperature: &'static str,
}

pub struct BodyInfo {
    /// Node name inside the loaded model.
    pub name: &'static str,
    /// Element id of the description panel in the hosting page.
    pub panel_id: &'static str,
    pub kind: BodyKind,
    pub offset: CameraOffset,
    pub auto_rotate: bool,
    pub facts: BodyFacts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 10] = [
        Self::Sun,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Moon,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub fn info(self) -> &'static BodyInfo {
        &BODIES[self as usize]
    }

    /// Scene node name, also used as the display name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Case-insensitive lookup, accepts "earth", "Earth" or "EARTH".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name.trim()))
    }
}

const fn planet(
    name: &'static str,
    panel_id: &'static str,
    offset: Vec3,
    facts: BodyFacts,
) -> BodyInfo {
    BodyInfo {
        name,
        panel_id,
        kind: BodyKind::Planet,
        offset: CameraOffset::Position(offset),
        auto_rotate: true,
        facts,
    }
}

/// Indexed by `CelestialBody as usize`.
pub static BODIES: [BodyInfo; 10] = [
    BodyInfo {
        name: "Sun",
        panel_id: "sunText",
        kind: BodyKind::Sun,
        offset: CameraOffset::AxisX(5000.0),
        auto_rotate: false,
        facts: BodyFacts {
            diameter: "1,392,684 km",
            mass: "1.99 × 10^30 kg",
            moons: "",
            orbit_distance: "",
            orbit_period: "",
            temperature: "5,500°C",
        },
    },
    planet(
        "Mercury",
        "mercuryText",
        Vec3::new(0.0, 0.0, 30.0),
        BodyFacts {
            diameter: "4,879 km",
            mass: "3.30 x 10^23 kg",
            moons: "0",
            orbit_distance: "57,909,227 km (0.39 AU)",
            orbit_period: "88 days (0.24 years)",
            temperature: "-173 to 427°C",
        },
    ),
    planet(
        "Venus",
        "venusText",
        Vec3::new(0.0, 0.0, 70.0),
        BodyFacts {
            diameter: "12,104 km",
            mass: "4.87 x 10^24 kg",
            moons: "0",
            orbit_distance: "108,209,475 km (0.73 AU)",
            orbit_period: "225 days (0.62 years)",
            temperature: "462°C",
        },
    ),
    planet(
        "Earth",
        "earthText",
        Vec3::new(60.0, 10.0, 60.0),
        BodyFacts {
            diameter: "12,756 km",
            mass: "5.97 x 10^24 kg",
            moons: "1",
            orbit_distance: "149,598,262 km (1 AU)",
            orbit_period: "365.24 Days (1 year)",
            temperature: "-88 to 58°C",
        },
    ),
    BodyInfo {
        name: "Moon",
        panel_id: "moonText",
        kind: BodyKind::Moon,
        offset: CameraOffset::Position(Vec3::new(0.0, 0.0, 20.0)),
        auto_rotate: true,
        facts: BodyFacts {
            diameter: "3,475 km",
            mass: "7.35 × 10^22 kg",
            moons: "",
            orbit_distance: "384,400 km",
            orbit_period: "27.3 days",
            temperature: "-233 to 123°C",
        },
    },
    planet(
        "Mars",
        "marsText",
        Vec3::new(0.0, 0.0, 40.0),
        BodyFacts {
            diameter: "6792 km",
            mass: "6.42 x 10^23 kg",
            moons: "2",
            orbit_distance: "227,943,824 km (1.52 AU)",
            orbit_period: "687 days (1.9 years)",
            temperature: "-153 to 20°C",
        },
    ),
    planet(
        "Jupiter",
        "jupiterText",
        Vec3::new(0.0, 0.0, 700.0),
        BodyFacts {
            diameter: "142,984 km",
            mass: "1.90 × 10^27 kg",
            moons: "67",
            orbit_distance: "778,340,821 km (5.20 AU)",
            orbit_period: "4,333 days (11.9 years)",
            temperature: "-148°C",
        },
    ),
    planet(
        "Saturn",
        "saturnText",
        Vec3::new(0.0, 100.0, 600.0),
        BodyFacts {
            diameter: "120,536 km",
            mass: "5.68 × 10^26 kg",
            moons: "62",
            orbit_distance: "1,426,666,422 km (9.54 AU)",
            orbit_period: "10,756 days (29.5 years)",
            temperature: "-178°C",
        },
    ),
    planet(
        "Uranus",
        "uranusText",
        Vec3::new(0.0, 0.0, 300.0),
        BodyFacts {
            diameter: "51,118 km",
            mass: "8.68 × 10^25 kg",
            moons: "27",
            orbit_distance: "2,870,658,186 km (19.19 AU)",
            orbit_period: "30,687 days (84.0 years)",
            temperature: "-216°C",
        },
    ),
    planet(
        "Neptune",
        "neptuneText",
        Vec3::new(0.0, 0.0, 300.0),
        BodyFacts {
            diameter: "49,528 km",
            mass: "1.02 × 10^26 kg",
            moons: "14",
            orbit_distance: "4,498,396,441 km (30.10 AU)",
            orbit_period: "60,190 days (164.8 years)",
            temperature: "-214°C",
        },
    ),
];
