use crate::serialization::enums::{flag_set, string_enum};

string_enum! {
    /// Kind of release an album is, read from `album_type`.
    ///
    /// # Example
    ///
    /// ```
    /// use spotify_web::model::AlbumType;
    ///
    /// assert_eq!("single".parse::<AlbumType>().unwrap(), AlbumType::Single);
    /// assert!("ep".parse::<AlbumType>().is_err());
    /// ```
    #[derive(Default)]
    pub enum AlbumType {
        #[default]
        Album => "album",
        Single => "single",
        Compilation => "compilation",
    }
}

string_enum! {
    /// How much of a release date is known.
    ///
    /// Ordered from coarsest to finest, so `Year < Month < Day`.
    #[derive(Default, PartialOrd, Ord)]
    pub enum ReleaseDatePrecision {
        Year => "year",
        Month => "month",
        #[default]
        Day => "day",
    }
}

string_enum! {
    /// Period over which personalization affinities are computed.
    ///
    /// Sent as the `time_range` query parameter; the service assumes
    /// [`TimeRange::MediumTerm`] when it is omitted.
    pub enum TimeRange {
        /// Approximately the last four weeks.
        ShortTerm => "short_term",
        /// Approximately the last six months.
        MediumTerm => "medium_term",
        /// Several years of data.
        LongTerm => "long_term",
    }
}

string_enum! {
    /// Subscription level of a private user.
    pub enum Product {
        Premium => "premium",
        Free => "free",
        Open => "open",
    }
}

string_enum! {
    /// Resource type tag carried in the `type` key of every object.
    ///
    /// # Example
    ///
    /// ```
    /// use spotify_web::model::ObjectType;
    ///
    /// assert_eq!(ObjectType::Episode.as_spotify_str(), "episode");
    /// ```
    pub enum ObjectType {
        Album => "album",
        Artist => "artist",
        Episode => "episode",
        Playlist => "playlist",
        Show => "show",
        Track => "track",
        User => "user",
    }
}

flag_set! {
    /// Relationship between an artist and an album, as used by
    /// `include_groups` and `album_group`.
    pub struct AlbumGroups {
        const ALBUM = 0 => "album";
        const SINGLE = 1 => "single";
        const COMPILATION = 2 => "compilation";
        const APPEARS_ON = 3 => "appears_on";
    }
}

flag_set! {
    /// OAuth scopes a user can grant to an application.
    ///
    /// Only the tokens listed here are known. Reading an unknown one fails
    /// with [`Error::InvalidEnumValue`](crate::error::Error::InvalidEnumValue)
    /// instead of being dropped, which also applies to the `scope` string of
    /// a token response.
    pub struct AuthorizationScopes {
        const UGC_IMAGE_UPLOAD = 0 => "ugc-image-upload";
        const USER_READ_PLAYBACK_STATE = 1 => "user-read-playback-state";
        const USER_MODIFY_PLAYBACK_STATE = 2 => "user-modify-playback-state";
        const USER_READ_CURRENTLY_PLAYING = 3 => "user-read-currently-playing";
        const APP_REMOTE_CONTROL = 4 => "app-remote-control";
        const STREAMING = 5 => "streaming";
        const PLAYLIST_READ_PRIVATE = 6 => "playlist-read-private";
        const PLAYLIST_READ_COLLABORATIVE = 7 => "playlist-read-collaborative";
        const PLAYLIST_MODIFY_PRIVATE = 8 => "playlist-modify-private";
        const PLAYLIST_MODIFY_PUBLIC = 9 => "playlist-modify-public";
        const USER_FOLLOW_MODIFY = 10 => "user-follow-modify";
        const USER_FOLLOW_READ = 11 => "user-follow-read";
        const USER_READ_PLAYBACK_POSITION = 12 => "user-read-playback-position";
        const USER_TOP_READ = 13 => "user-top-read";
        const USER_READ_RECENTLY_PLAYED = 14 => "user-read-recently-played";
        const USER_LIBRARY_MODIFY = 15 => "user-library-modify";
        const USER_LIBRARY_READ = 16 => "user-library-read";
        const USER_READ_EMAIL = 17 => "user-read-email";
        const USER_READ_PRIVATE = 18 => "user-read-private";
    }
}

impl AuthorizationScopes {
    /// Parses the space-separated `scope` string of a token response.
    ///
    /// # Arguments
    ///
    /// * `scope` - Scope tokens separated by whitespace; empty means no scopes
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnumValue`](crate::error::Error::InvalidEnumValue)
    /// for the first token that is not a known scope.
    ///
    /// # Example
    ///
    /// ```
    /// use spotify_web::model::AuthorizationScopes;
    ///
    /// let scopes = AuthorizationScopes::from_scope_string("user-top-read user-read-email").unwrap();
    /// assert!(scopes.contains(AuthorizationScopes::USER_TOP_READ));
    /// assert!(AuthorizationScopes::from_scope_string("user-read-aura").is_err());
    /// ```
    pub fn from_scope_string(scope: &str) -> Result<Self, crate::error::Error> {
        Self::from_spotify_strs(scope.split_whitespace())
    }
}
