//! Static icon animations, one per icon category.
//!
//! The terminal stand-in for the bundled vector animations: each icon
//! category maps to a fixed set of text frames, defined once for the
//! whole process and never torn down.

use cuaca_core::IconKind;

/// A looping text animation. Frames all share the same dimensions so a
/// surface can redraw in place.
#[derive(Debug)]
pub struct Animation {
    pub frames: &'static [&'static str],
}

impl Animation {
    /// The frame to show on a surface that does not animate.
    pub fn first_frame(&self) -> &'static str {
        self.frames[0]
    }
}

static CLEAR_DAY: Animation = Animation {
    frames: &[
        r"    \ | /
   -- O --
    / | \ ",
        r"    . | .
   -- O --
    . | . ",
    ],
};

static PARTLY_CLOUDY_DAY: Animation = Animation {
    frames: &[
        r"   \ /
  - O .--.
   (    . )
    `--'  ",
        r"   . .
  - O .--.
   (    . )
    `--'  ",
    ],
};

static CLOUDY: Animation = Animation {
    frames: &[
        r"     .--.
  .-(    )-.
 (          )
  `--------' ",
        r"    .--.
  .-(    ).-.
 (          )
  `--------' ",
    ],
};

static RAINY: Animation = Animation {
    frames: &[
        r"     .--.
  .-(    )-.
   `------'
   / / / / ",
        r"     .--.
  .-(    )-.
   `------'
    / / / /",
    ],
};

static THUNDERSTORM: Animation = Animation {
    frames: &[
        r"     .--.
  .-(    )-.
   `------'
     /_/
      /  ",
        r"     .--.
  .-(    )-.
   `------'
      /_/
       / ",
    ],
};

/// Look up the animation for an icon category.
pub fn animation_for(icon: IconKind) -> &'static Animation {
    match icon {
        IconKind::Clear => &CLEAR_DAY,
        IconKind::PartlyCloudy => &PARTLY_CLOUDY_DAY,
        IconKind::Cloudy => &CLOUDY,
        IconKind::Rainy => &RAINY,
        IconKind::Thunderstorm => &THUNDERSTORM,
    }
}
