//! Curated city table.
//!
//! Keys are lowercase, already normalized. Order is significant: the
//! resolver walks this slice front to back and the first hit wins, so
//! longer or more prominent names sit ahead of names they contain
//! ("new york" before "york").

/// (key, latitude, longitude)
pub type CityEntry = (&'static str, f64, f64);

pub const CITIES: &[CityEntry] = &[
    // United States
    ("new york", 40.7128, -74.0060),
    ("los angeles", 34.0522, -118.2437),
    ("chicago", 41.8781, -87.6298),
    ("houston", 29.7604, -95.3698),
    ("phoenix", 33.4484, -112.0740),
    ("philadelphia", 39.9526, -75.1652),
    ("san antonio", 29.4241, -98.4936),
    ("san diego", 32.7157, -117.1611),
    ("dallas", 32.7767, -96.7970),
    ("san jose", 37.3382, -121.8863),
    ("austin", 30.2672, -97.7431),
    ("jacksonville", 30.3322, -81.6557),
    ("san francisco", 37.7749, -122.4194),
    ("columbus", 39.9612, -82.9988),
    ("fort worth", 32.7555, -97.3308),
    ("indianapolis", 39.7684, -86.1581),
    ("charlotte", 35.2271, -80.8431),
    ("seattle", 47.6062, -122.3321),
    ("denver", 39.7392, -104.9903),
    ("washington", 38.9072, -77.0369),
    ("boston", 42.3601, -71.0589),
    ("el paso", 31.7619, -106.4850),
    ("nashville", 36.1627, -86.7816),
    ("detroit", 42.3314, -83.0458),
    ("oklahoma city", 35.4676, -97.5164),
    ("portland", 45.5152, -122.6784),
    ("las vegas", 36.1699, -115.1398),
    ("memphis", 35.1495, -90.0490),
    ("louisville", 38.2527, -85.7585),
    ("baltimore", 39.2904, -76.6122),
    ("milwaukee", 43.0389, -87.9065),
    ("albuquerque", 35.0844, -106.6504),
    ("tucson", 32.2226, -110.9747),
    ("fresno", 36.7378, -119.7871),
    ("sacramento", 38.5816, -121.4944),
    ("kansas city", 39.0997, -94.5786),
    ("atlanta", 33.7490, -84.3880),
    ("miami", 25.7617, -80.1918),
    ("raleigh", 35.7796, -78.6382),
    ("omaha", 41.2565, -95.9345),
    ("minneapolis", 44.9778, -93.2650),
    ("tulsa", 36.1540, -95.9928),
    ("cleveland", 41.4993, -81.6944),
    ("new orleans", 29.9511, -90.0715),
    ("tampa", 27.9506, -82.4572),
    ("orlando", 28.5383, -81.3792),
    ("pittsburgh", 40.4406, -79.9959),
    ("cincinnati", 39.1031, -84.5120),
    ("st louis", 38.6270, -90.1994),
    ("salt lake city", 40.7608, -111.8910),
    ("honolulu", 21.3069, -157.8583),
    ("anchorage", 61.2181, -149.9003),
    ("buffalo", 42.8864, -78.8784),
    ("richmond", 37.5407, -77.4360),
    ("brooklyn", 40.6782, -73.9442),
    // Canada
    ("toronto", 43.6532, -79.3832),
    ("montreal", 45.5017, -73.5673),
    ("vancouver", 49.2827, -123.1207),
    ("calgary", 51.0447, -114.0719),
    ("edmonton", 53.5461, -113.4938),
    ("ottawa", 45.4215, -75.6972),
    ("winnipeg", 49.8951, -97.1384),
    ("quebec city", 46.8139, -71.2080),
    // Latin America
    ("mexico city", 19.4326, -99.1332),
    ("guadalajara", 20.6597, -103.3496),
    ("monterrey", 25.6866, -100.3161),
    ("havana", 23.1136, -82.3666),
    ("bogota", 4.7110, -74.0721),
    ("lima", -12.0464, -77.0428),
    ("santiago", -33.4489, -70.6693),
    ("buenos aires", -34.6037, -58.3816),
    ("sao paulo", -23.5505, -46.6333),
    ("rio de janeiro", -22.9068, -43.1729),
    ("caracas", 10.4806, -66.9036),
    ("quito", -0.1807, -78.4678),
    ("montevideo", -34.9011, -56.1645),
    // Europe
    ("london", 51.5074, -0.1278),
    ("manchester", 53.4808, -2.2426),
    ("birmingham", 52.4862, -1.8904),
    ("liverpool", 53.4084, -2.9916),
    ("edinburgh", 55.9533, -3.1883),
    ("glasgow", 55.8642, -4.2518),
    ("dublin", 53.3498, -6.2603),
    ("york", 53.9600, -1.0873),
    ("paris", 48.8566, 2.3522),
    ("marseille", 43.2965, 5.3698),
    ("lyon", 45.7640, 4.8357),
    ("berlin", 52.5200, 13.4050),
    ("hamburg", 53.5511, 9.9937),
    ("munich", 48.1351, 11.5820),
    ("frankfurt", 50.1109, 8.6821),
    ("cologne", 50.9375, 6.9603),
    ("amsterdam", 52.3676, 4.9041),
    ("rotterdam", 51.9244, 4.4777),
    ("brussels", 50.8503, 4.3517),
    ("zurich", 47.3769, 8.5417),
    ("geneva", 46.2044, 6.1432),
    ("vienna", 48.2082, 16.3738),
    ("prague", 50.0755, 14.4378),
    ("warsaw", 52.2297, 21.0122),
    ("budapest", 47.4979, 19.0402),
    ("rome", 41.9028, 12.4964),
    ("milan", 45.4642, 9.1900),
    ("naples", 40.8518, 14.2681),
    ("venice", 45.4408, 12.3155),
    ("florence", 43.7696, 11.2558),
    ("madrid", 40.4168, -3.7038),
    ("barcelona", 41.3851, 2.1734),
    ("seville", 37.3891, -5.9845),
    ("lisbon", 38.7223, -9.1393),
    ("porto", 41.1579, -8.6291),
    ("athens", 37.9838, 23.7275),
    ("stockholm", 59.3293, 18.0686),
    ("oslo", 59.9139, 10.7522),
    ("copenhagen", 55.6761, 12.5683),
    ("helsinki", 60.1699, 24.9384),
    ("reykjavik", 64.1466, -21.9426),
    ("moscow", 55.7558, 37.6173),
    ("saint petersburg", 59.9311, 30.3609),
    ("kyiv", 50.4501, 30.5234),
    ("istanbul", 41.0082, 28.9784),
    ("bucharest", 44.4268, 26.1025),
    ("nice", 43.7102, 7.2620),
    // Middle East and Africa
    ("dubai", 25.2048, 55.2708),
    ("abu dhabi", 24.4539, 54.3773),
    ("tel aviv", 32.0853, 34.7818),
    ("jerusalem", 31.7683, 35.2137),
    ("tehran", 35.6892, 51.3890),
    ("riyadh", 24.7136, 46.6753),
    ("cairo", 30.0444, 31.2357),
    ("lagos", 6.5244, 3.3792),
    ("nairobi", -1.2921, 36.8219),
    ("johannesburg", -26.2041, 28.0473),
    ("cape town", -33.9249, 18.4241),
    ("casablanca", 33.5731, -7.5898),
    ("accra", 5.6037, -0.1870),
    ("addis ababa", 9.0300, 38.7400),
    // Asia
    ("tokyo", 35.6762, 139.6503),
    ("osaka", 34.6937, 135.5023),
    ("kyoto", 35.0116, 135.7681),
    ("seoul", 37.5665, 126.9780),
    ("beijing", 39.9042, 116.4074),
    ("shanghai", 31.2304, 121.4737),
    ("hong kong", 22.3193, 114.1694),
    ("taipei", 25.0330, 121.5654),
    ("singapore", 1.3521, 103.8198),
    ("bangkok", 13.7563, 100.5018),
    ("kuala lumpur", 3.1390, 101.6869),
    ("jakarta", -6.2088, 106.8456),
    ("manila", 14.5995, 120.9842),
    ("ho chi minh city", 10.8231, 106.6297),
    ("hanoi", 21.0278, 105.8342),
    ("mumbai", 19.0760, 72.8777),
    ("new delhi", 28.6139, 77.2090),
    ("delhi", 28.7041, 77.1025),
    ("bangalore", 12.9716, 77.5946),
    ("kolkata", 22.5726, 88.3639),
    ("chennai", 13.0827, 80.2707),
    ("karachi", 24.8607, 67.0011),
    ("dhaka", 23.8103, 90.4125),
    // Oceania
    ("sydney", -33.8688, 151.2093),
    ("melbourne", -37.8136, 144.9631),
    ("brisbane", -27.4698, 153.0251),
    ("perth", -31.9505, 115.8605),
    ("adelaide", -34.9285, 138.6007),
    ("auckland", -36.8485, 174.7633),
    ("wellington", -41.2865, 174.7762),
];

/// Abbreviations and nicknames, matched against single input words.
pub const ALIASES: &[(&str, &str)] = &[
    ("nyc", "new york"),
    ("ny", "new york"),
    ("la", "los angeles"),
    ("sf", "san francisco"),
    ("dc", "washington"),
    ("philly", "philadelphia"),
    ("vegas", "las vegas"),
    ("nola", "new orleans"),
    ("atl", "atlanta"),
    ("chi", "chicago"),
    ("slc", "salt lake city"),
    ("kc", "kansas city"),
    ("stl", "st louis"),
    ("okc", "oklahoma city"),
    ("ldn", "london"),
    ("cdmx", "mexico city"),
    ("rio", "rio de janeiro"),
    ("hk", "hong kong"),
    ("bombay", "mumbai"),
    ("calcutta", "kolkata"),
    ("bengaluru", "bangalore"),
    ("saigon", "ho chi minh city"),
    ("peking", "beijing"),
    ("kiev", "kyiv"),
];
