//! State tags
//!
//! Every piece of emulator state a front-end can show or change has a tag.
//! Each tag gets exactly one message group on the [`UiBus`](crate::UiBus).

use retrobus_core::{Error, MessageType};
use std::fmt;
use std::str::FromStr;

macro_rules! ui_tags {
    ($( $(#[$doc:meta])* $variant:ident = $name:literal, )+) => {
        /// Synchronised UI/emulator state identifiers.
        ///
        /// Values start at 1 and are stable: they double as the message type
        /// of every state message sent for the tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum UiTag {
            $( $(#[$doc])* $variant, )+
        }

        impl UiTag {
            /// Every tag, in value order.
            pub const ALL: &'static [UiTag] = &[ $( UiTag::$variant, )+ ];

            /// Kebab-case name, as used in configuration files and commands.
            pub const fn name(self) -> &'static str {
                match self {
                    $( UiTag::$variant => $name, )+
                }
            }
        }
    };
}

ui_tags! {
    /// Generic action trigger (reset, quit, snapshot...)
    Action = "action",

    // Hardware
    /// Selected machine configuration
    Machine = "machine",
    /// Inserted cartridge
    Cartridge = "cartridge",

    // Tape
    /// Show or hide the tape control dialog
    TapeDialog = "tape-dialog",
    /// Fast tape loading
    TapeFlagFast = "tape-fast",
    /// Automatic leader padding
    TapeFlagPadAuto = "tape-pad-auto",
    /// Rewrite tape on load
    TapeFlagRewrite = "tape-rewrite",
    /// Tape input file name
    TapeInputFilename = "tape-input",
    /// Tape output file name
    TapeOutputFilename = "tape-output",
    /// Tape motor state
    TapeMotor = "tape-motor",
    /// Tape play/pause
    TapePlaying = "tape-playing",

    // Disk
    /// Show or hide the drive control dialog
    DiskDialog = "disk-dialog",
    /// Full state of one drive
    DiskData = "disk-data",
    /// Create a blank disk
    DiskNew = "disk-new",
    /// Insert a disk image
    DiskInsert = "disk-insert",
    /// Eject a disk image
    DiskEject = "disk-eject",
    /// Write enable for a drive
    DiskWriteEnable = "disk-write-enable",
    /// Write back to the image file
    DiskWriteBack = "disk-write-back",

    // Video
    /// Show or hide the TV controls dialog
    TvDialog = "tv-dialog",
    /// Fullscreen toggle
    Fullscreen = "fullscreen",
    /// Menubar visibility
    Menubar = "menubar",
    /// VDG inverse text
    VdgInverse = "vdg-inverse",
    /// Cross-colour renderer
    Ccr = "ccr",
    /// Picture area
    Picture = "picture",
    /// NTSC scaling
    NtscScaling = "ntsc-scaling",
    /// TV input (composite, RGB...)
    TvInput = "tv-input",
    /// Brightness
    Brightness = "brightness",
    /// Contrast
    Contrast = "contrast",
    /// Saturation
    Saturation = "saturation",
    /// Hue
    Hue = "hue",
    /// Window zoom
    Zoom = "zoom",

    // Audio
    /// Output volume
    AudioVolume = "volume",
    /// Speed limiting
    Ratelimit = "ratelimit",
    /// Latched speed limit (survives fast-forward)
    RatelimitLatch = "ratelimit-latch",

    // Keyboard
    /// Emulated keyboard map
    Keymap = "keymap",
    /// Host keyboard layout
    HkbdLayout = "hkbd-layout",
    /// Host keyboard language
    HkbdLang = "hkbd-lang",
    /// Keyboard translation
    KbdTranslate = "kbd-translate",

    // Joysticks
    /// Right joystick port
    JoyRight = "joy-right",
    /// Left joystick port
    JoyLeft = "joy-left",
    /// Swap joystick ports
    JoystickSwap = "joy-swap",

    // Printer
    /// Show or hide the printer dialog
    PrintDialog = "print-dialog",
    /// Printer destination
    PrintDestination = "print-destination",
    /// Printer output file
    PrintFile = "print-file",
    /// Printer output pipe
    PrintPipe = "print-pipe",
    /// Characters printed so far
    PrintCount = "print-count",

    // Misc
    /// Save configuration on exit
    ConfigAutosave = "config-autosave",
    /// Show the about dialog
    About = "about",
    /// Show help
    Help = "help",
    /// Debugger stub enable
    Gdb = "gdb",
    /// CPU trace logging
    Trace = "trace",
}

impl UiTag {
    /// Number of tags.
    pub const COUNT: usize = Self::ALL.len();

    /// Integer value of the tag, also its message type.
    pub const fn value(self) -> MessageType {
        self as MessageType + 1
    }

    /// Zero-based position in [`UiTag::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a tag up by its integer value.
    pub fn from_value(value: MessageType) -> Option<Self> {
        value
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Look a tag up by its exact name, as written by [`UiTag::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.name() == name)
    }

    /// Name of the message group backing this tag.
    pub fn group_name(self) -> String {
        format!("ui-tag-{}", self.value())
    }
}

impl fmt::Display for UiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UiTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownTag {
                name: wanted.to_string(),
            })
    }
}
