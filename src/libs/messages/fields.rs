//! Form field titles, grouped by the phase whose form shows them.
//!
//! A title is the exact prompt a user sees for the field. Anything that
//! describes the same field elsewhere (metadata keys, API labels) must use
//! these constants rather than its own copy of the text.

// Initial details fields
pub const FIELD_TITLE_PROJECT_NAME: &str = "Project Name";
pub const FIELD_TITLE_PROJECT_URL: &str = "Project URL";
pub const FIELD_TITLE_SPONSORSHIP_AMOUNT: &str = "Sponsorship Amount";
pub const FIELD_TITLE_SPONSORSHIP_EMAILS: &str = "Sponsorship Emails";
pub const FIELD_TITLE_SPONSORSHIP_BLOCKED: &str = "Sponsorship Blocked Reason";
pub const FIELD_TITLE_PUBLISH_DATE: &str = "Publish Date";
pub const FIELD_TITLE_DELAYED: &str = "Delayed";
pub const FIELD_TITLE_GIST_PATH: &str = "Gist Path";

// Work progress fields
pub const FIELD_TITLE_CODE_DONE: &str = "Code Done";
pub const FIELD_TITLE_TALKING_HEAD_DONE: &str = "Talking Head Done";
pub const FIELD_TITLE_SCREEN_RECORDING_DONE: &str = "Screen Recording Done";
pub const FIELD_TITLE_RELATED_VIDEOS: &str = "Related Videos";
pub const FIELD_TITLE_THUMBNAILS_DONE: &str = "Thumbnails Done";
pub const FIELD_TITLE_DIAGRAMS_DONE: &str = "Diagrams Done";
pub const FIELD_TITLE_SCREENSHOTS_DONE: &str = "Screenshots Done";
pub const FIELD_TITLE_FILES_LOCATION: &str = "Files Location";
pub const FIELD_TITLE_TAGLINE: &str = "Tagline";
pub const FIELD_TITLE_TAGLINE_IDEAS: &str = "Tagline Ideas";
pub const FIELD_TITLE_OTHER_LOGOS: &str = "Other Logos";

// Definition fields
pub const FIELD_TITLE_TITLE: &str = "Title";
pub const FIELD_TITLE_DESCRIPTION: &str = "Description";
pub const FIELD_TITLE_HIGHLIGHT: &str = "Highlight";
pub const FIELD_TITLE_TAGS: &str = "Tags";
pub const FIELD_TITLE_DESCRIPTION_TAGS: &str = "Description Tags";
pub const FIELD_TITLE_TWEET_TEXT: &str = "Tweet Text";
pub const FIELD_TITLE_ANIMATIONS_SCRIPT: &str = "Animations Script";
pub const FIELD_TITLE_REQUEST_THUMBNAIL: &str = "Request Thumbnail";

// Post-production fields
pub const FIELD_TITLE_THUMBNAIL_PATH: &str = "Thumbnail Path";
pub const FIELD_TITLE_MEMBERS: &str = "Members";
pub const FIELD_TITLE_REQUEST_EDIT: &str = "Request Edit";
pub const FIELD_TITLE_TIMECODES: &str = "Timecodes";
pub const FIELD_TITLE_MOVIE_DONE: &str = "Movie Done";
pub const FIELD_TITLE_SLIDES_DONE: &str = "Slides Done";

// Publishing details fields
pub const FIELD_TITLE_VIDEO_FILE_PATH: &str = "Video File Path";
pub const FIELD_TITLE_UPLOAD_TO_YOUTUBE: &str = "Upload to YouTube";
pub const FIELD_TITLE_CREATE_HUGO_POST: &str = "Create Hugo Post";

// Post-publish fields
pub const FIELD_TITLE_BLUESKY_POST: &str = "Bluesky Post";
pub const FIELD_TITLE_LINKEDIN_POST: &str = "LinkedIn Post";
pub const FIELD_TITLE_SLACK_POST: &str = "Slack Post";
pub const FIELD_TITLE_YOUTUBE_HIGHLIGHT: &str = "YouTube Highlight";
pub const FIELD_TITLE_YOUTUBE_COMMENT: &str = "YouTube Comment";
pub const FIELD_TITLE_YOUTUBE_COMMENT_REPLIES: &str = "YouTube Comment Replies";
pub const FIELD_TITLE_GDE_POST: &str = "GDE Post";
pub const FIELD_TITLE_CODE_REPOSITORY: &str = "Code Repository";
pub const FIELD_TITLE_NOTIFY_SPONSORS: &str = "Notify Sponsors";
