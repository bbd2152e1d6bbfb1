use std::fmt;

/// Means-of-death reported at the end of every kill line.
///
/// The named variants cover every `MOD_*` token the server emits; anything
/// else (modded servers, corrupted lines) is carried through verbatim as
/// `Unrecognized` so the report still shows what was logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillMethod {
    Unknown,
    Shotgun,
    Gauntlet,
    Machinegun,
    Grenade,
    GrenadeSplash,
    Rocket,
    RocketSplash,
    Plasma,
    PlasmaSplash,
    Railgun,
    Lightning,
    Bfg,
    BfgSplash,
    Water,
    Slime,
    Lava,
    Crush,
    Telefrag,
    Falling,
    Suicide,
    TargetLaser,
    TriggerHurt,
    Nail,
    Chaingun,
    ProximityMine,
    Kamikaze,
    Juiced,
    Grapple,
    Unrecognized(String),
}

// the server logs the grapple cause as MOD_GRAPPL, not MOD_GRAPPLE
static KILL_METHOD_TOKENS: phf::Map<&'static str, KillMethod> = phf::phf_map! {
    "MOD_UNKNOWN" => KillMethod::Unknown,
    "MOD_SHOTGUN" => KillMethod::Shotgun,
    "MOD_GAUNTLET" => KillMethod::Gauntlet,
    "MOD_MACHINEGUN" => KillMethod::Machinegun,
    "MOD_GRENADE" => KillMethod::Grenade,
    "MOD_GRENADE_SPLASH" => KillMethod::GrenadeSplash,
    "MOD_ROCKET" => KillMethod::Rocket,
    "MOD_ROCKET_SPLASH" => KillMethod::RocketSplash,
    "MOD_PLASMA" => KillMethod::Plasma,
    "MOD_PLASMA_SPLASH" => KillMethod::PlasmaSplash,
    "MOD_RAILGUN" => KillMethod::Railgun,
    "MOD_LIGHTNING" => KillMethod::Lightning,
    "MOD_BFG" => KillMethod::Bfg,
    "MOD_BFG_SPLASH" => KillMethod::BfgSplash,
    "MOD_WATER" => KillMethod::Water,
    "MOD_SLIME" => KillMethod::Slime,
    "MOD_LAVA" => KillMethod::Lava,
    "MOD_CRUSH" => KillMethod::Crush,
    "MOD_TELEFRAG" => KillMethod::Telefrag,
    "MOD_FALLING" => KillMethod::Falling,
    "MOD_SUICIDE" => KillMethod::Suicide,
    "MOD_TARGET_LASER" => KillMethod::TargetLaser,
    "MOD_TRIGGER_HURT" => KillMethod::TriggerHurt,
    "MOD_NAIL" => KillMethod::Nail,
    "MOD_CHAINGUN" => KillMethod::Chaingun,
    "MOD_PROXIMITY_MINE" => KillMethod::ProximityMine,
    "MOD_KAMIKAZE" => KillMethod::Kamikaze,
    "MOD_JUICED" => KillMethod::Juiced,
    "MOD_GRAPPL" => KillMethod::Grapple,
};

impl KillMethod {
    pub fn from_token(token: &str) -> Self {
        KILL_METHOD_TOKENS
            .get(token)
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(token.to_string()))
    }

    /// The token exactly as it appears in the log.
    pub fn as_token(&self) -> &str {
        match self {
            Self::Unknown => "MOD_UNKNOWN",
            Self::Shotgun => "MOD_SHOTGUN",
            Self::Gauntlet => "MOD_GAUNTLET",
            Self::Machinegun => "MOD_MACHINEGUN",
            Self::Grenade => "MOD_GRENADE",
            Self::GrenadeSplash => "MOD_GRENADE_SPLASH",
            Self::Rocket => "MOD_ROCKET",
            Self::RocketSplash => "MOD_ROCKET_SPLASH",
            Self::Plasma => "MOD_PLASMA",
            Self::PlasmaSplash => "MOD_PLASMA_SPLASH",
            Self::Railgun => "MOD_RAILGUN",
            Self::Lightning => "MOD_LIGHTNING",
            Self::Bfg => "MOD_BFG",
            Self::BfgSplash => "MOD_BFG_SPLASH",
            Self::Water => "MOD_WATER",
            Self::Slime => "MOD_SLIME",
            Self::Lava => "MOD_LAVA",
            Self::Crush => "MOD_CRUSH",
            Self::Telefrag => "MOD_TELEFRAG",
            Self::Falling => "MOD_FALLING",
            Self::Suicide => "MOD_SUICIDE",
            Self::TargetLaser => "MOD_TARGET_LASER",
            Self::TriggerHurt => "MOD_TRIGGER_HURT",
            Self::Nail => "MOD_NAIL",
            Self::Chaingun => "MOD_CHAINGUN",
            Self::ProximityMine => "MOD_PROXIMITY_MINE",
            Self::Kamikaze => "MOD_KAMIKAZE",
            Self::Juiced => "MOD_JUICED",
            Self::Grapple => "MOD_GRAPPL",
            Self::Unrecognized(token) => token,
        }
    }
}

impl fmt::Display for KillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
