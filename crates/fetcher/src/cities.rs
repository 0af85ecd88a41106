use std::fmt;

/// A capital city with the coordinates the archive API is queried for.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City: {}, Latitude: {}, Longitude: {}",
            self.name, self.latitude, self.longitude
        )
    }
}

// Coordinates from https://gist.github.com/ofou/df09a6834ab87232383c0269399436e2
pub const CAPITALS: [City; 10] = [
    City {
        name: "Paris",
        latitude: 48.8566,
        longitude: 2.3522,
    },
    City {
        name: "London",
        latitude: 51.5074,
        longitude: -0.1278,
    },
    City {
        name: "New York",
        latitude: 40.7128,
        longitude: -74.0060,
    },
    City {
        name: "Tokyo",
        latitude: 35.6895,
        longitude: 139.6917,
    },
    City {
        name: "Sydney",
        latitude: -33.8688,
        longitude: 151.2093,
    },
    City {
        name: "Cairo",
        latitude: 30.0444,
        longitude: 31.2357,
    },
    City {
        name: "Rio de Janeiro",
        latitude: -22.9068,
        longitude: -43.1729,
    },
    City {
        name: "Moscow",
        latitude: 55.7558,
        longitude: 37.6173,
    },
    City {
        name: "Beijing",
        latitude: 39.9042,
        longitude: 116.4074,
    },
    City {
        name: "New Delhi",
        latitude: 28.6139,
        longitude: 77.2090,
    },
];
