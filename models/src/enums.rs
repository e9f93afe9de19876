//! One enum per remote concept, carried on the wire as its integer code.
//!
//! Codes the API adds later decode to `Unrecognized(code)` and encode back
//! unchanged.

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A code this client does not know about.
            Unrecognized(i64),
        }

        impl $name {
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unrecognized(code) => code,
                }
            }

            pub const fn is_recognized(self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unrecognized(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

wire_enum! {
    MonitorType {
        Http = 1,
        Keyword = 2,
        Ping = 3,
        Port = 4,
        Heartbeat = 5,
    }
}

wire_enum! {
    /// Protocol preset for port monitors.
    MonitorSubType {
        Http = 1,
        Https = 2,
        Ftp = 3,
        Smtp = 4,
        Pop3 = 5,
        Imap = 6,
        Custom = 99,
    }
}

wire_enum! {
    KeywordType {
        Exists = 1,
        NotExists = 2,
    }
}

wire_enum! {
    KeywordCaseType {
        CaseInsensitive = 0,
        CaseSensitive = 1,
    }
}

wire_enum! {
    MonitorStatus {
        Paused = 0,
        NotCheckedYet = 1,
        Up = 2,
        SeemsDown = 8,
        Down = 9,
    }
}

wire_enum! {
    HttpAuthType {
        Basic = 1,
        Digest = 2,
    }
}

wire_enum! {
    HttpMethod {
        Head = 1,
        Get = 2,
        Post = 3,
        Put = 4,
        Patch = 5,
        Delete = 6,
        Options = 7,
    }
}

wire_enum! {
    PostType {
        KeyValue = 1,
        RawJson = 2,
    }
}

wire_enum! {
    PostContentType {
        TextHtml = 0,
        ApplicationJson = 1,
    }
}

wire_enum! {
    LogType {
        Down = 1,
        Up = 2,
        Started = 98,
        Paused = 99,
    }
}

wire_enum! {
    AlertContactType {
        /// Accepted when reading, rejected by this client when creating.
        Sms = 1,
        Email = 2,
        TwitterDm = 3,
        Boxcar = 4,
        WebHook = 5,
        Pushbullet = 6,
        Zapier = 7,
        Pushover = 9,
        HipChat = 10,
        Slack = 11,
    }
}

wire_enum! {
    AlertContactStatus {
        NotActivated = 0,
        Paused = 1,
        Active = 2,
    }
}

wire_enum! {
    MaintenanceWindowType {
        Once = 1,
        Daily = 2,
        Weekly = 3,
        Monthly = 4,
    }
}

impl MaintenanceWindowType {
    /// Weekly and monthly windows need a day list in `value`.
    pub const fn needs_days(self) -> bool {
        matches!(self, Self::Weekly | Self::Monthly)
    }
}

wire_enum! {
    MaintenanceWindowStatus {
        Paused = 0,
        Active = 1,
    }
}

wire_enum! {
    StatusPageSort {
        FriendlyNameAsc = 1,
        FriendlyNameDesc = 2,
        UpDownPaused = 3,
        DownUpPaused = 4,
    }
}

wire_enum! {
    StatusPageStatus {
        Paused = 0,
        Active = 1,
    }
}
