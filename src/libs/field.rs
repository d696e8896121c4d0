//! Form fields of the production phases.
//!
//! Every field has exactly one title in [`crate::libs::messages::fields`];
//! [`Field::title`] hands that constant out so the menus and any metadata
//! describing the field print the same text.

use super::messages::fields::*;
use super::phase::Phase;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single editable piece of information on a phase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Initial details
    ProjectName,
    ProjectUrl,
    SponsorshipAmount,
    SponsorshipEmails,
    SponsorshipBlocked,
    PublishDate,
    Delayed,
    GistPath,
    // Work progress
    CodeDone,
    TalkingHeadDone,
    ScreenRecordingDone,
    RelatedVideos,
    ThumbnailsDone,
    DiagramsDone,
    ScreenshotsDone,
    FilesLocation,
    Tagline,
    TaglineIdeas,
    OtherLogos,
    // Definition
    Title,
    Description,
    Highlight,
    Tags,
    DescriptionTags,
    TweetText,
    AnimationsScript,
    RequestThumbnail,
    // Post-production
    ThumbnailPath,
    Members,
    RequestEdit,
    Timecodes,
    MovieDone,
    SlidesDone,
    // Publishing details
    VideoFilePath,
    UploadToYoutube,
    CreateHugoPost,
    // Post-publish
    BlueskyPost,
    LinkedinPost,
    SlackPost,
    YoutubeHighlight,
    YoutubeComment,
    YoutubeCommentReplies,
    GdePost,
    CodeRepository,
    NotifySponsors,
}

pub(crate) const INITIAL_DETAILS_FIELDS: [Field; 8] = [
    Field::ProjectName,
    Field::ProjectUrl,
    Field::SponsorshipAmount,
    Field::SponsorshipEmails,
    Field::SponsorshipBlocked,
    Field::PublishDate,
    Field::Delayed,
    Field::GistPath,
];

pub(crate) const WORK_PROGRESS_FIELDS: [Field; 11] = [
    Field::CodeDone,
    Field::TalkingHeadDone,
    Field::ScreenRecordingDone,
    Field::RelatedVideos,
    Field::ThumbnailsDone,
    Field::DiagramsDone,
    Field::ScreenshotsDone,
    Field::FilesLocation,
    Field::Tagline,
    Field::TaglineIdeas,
    Field::OtherLogos,
];

pub(crate) const DEFINITION_FIELDS: [Field; 8] = [
    Field::Title,
    Field::Description,
    Field::Highlight,
    Field::Tags,
    Field::DescriptionTags,
    Field::TweetText,
    Field::AnimationsScript,
    Field::RequestThumbnail,
];

pub(crate) const POST_PRODUCTION_FIELDS: [Field; 6] = [
    Field::ThumbnailPath,
    Field::Members,
    Field::RequestEdit,
    Field::Timecodes,
    Field::MovieDone,
    Field::SlidesDone,
];

pub(crate) const PUBLISHING_DETAILS_FIELDS: [Field; 3] = [
    Field::VideoFilePath,
    Field::UploadToYoutube,
    Field::CreateHugoPost,
];

pub(crate) const POST_PUBLISH_FIELDS: [Field; 9] = [
    Field::BlueskyPost,
    Field::LinkedinPost,
    Field::SlackPost,
    Field::YoutubeHighlight,
    Field::YoutubeComment,
    Field::YoutubeCommentReplies,
    Field::GdePost,
    Field::CodeRepository,
    Field::NotifySponsors,
];

const fn concat_groups() -> [Field; 45] {
    let groups: [&[Field]; 6] = [
        &INITIAL_DETAILS_FIELDS,
        &WORK_PROGRESS_FIELDS,
        &DEFINITION_FIELDS,
        &POST_PRODUCTION_FIELDS,
        &PUBLISHING_DETAILS_FIELDS,
        &POST_PUBLISH_FIELDS,
    ];
    let mut all = [Field::ProjectName; 45];
    let mut next = 0;
    let mut group = 0;
    while group < groups.len() {
        let mut index = 0;
        while index < groups[group].len() {
            all[next] = groups[group][index];
            next += 1;
            index += 1;
        }
        group += 1;
    }
    // A group total other than 45 fails const evaluation here.
    assert!(next == 45);
    all
}

impl Field {
    /// Every field, grouped by phase in workflow order.
    pub const ALL: [Field; 45] = concat_groups();

    /// The prompt shown for this field.
    pub fn title(self) -> &'static str {
        match self {
            Field::ProjectName => FIELD_TITLE_PROJECT_NAME,
            Field::ProjectUrl => FIELD_TITLE_PROJECT_URL,
            Field::SponsorshipAmount => FIELD_TITLE_SPONSORSHIP_AMOUNT,
            Field::SponsorshipEmails => FIELD_TITLE_SPONSORSHIP_EMAILS,
            Field::SponsorshipBlocked => FIELD_TITLE_SPONSORSHIP_BLOCKED,
            Field::PublishDate => FIELD_TITLE_PUBLISH_DATE,
            Field::Delayed => FIELD_TITLE_DELAYED,
            Field::GistPath => FIELD_TITLE_GIST_PATH,
            Field::CodeDone => FIELD_TITLE_CODE_DONE,
            Field::TalkingHeadDone => FIELD_TITLE_TALKING_HEAD_DONE,
            Field::ScreenRecordingDone => FIELD_TITLE_SCREEN_RECORDING_DONE,
            Field::RelatedVideos => FIELD_TITLE_RELATED_VIDEOS,
            Field::ThumbnailsDone => FIELD_TITLE_THUMBNAILS_DONE,
            Field::DiagramsDone => FIELD_TITLE_DIAGRAMS_DONE,
            Field::ScreenshotsDone => FIELD_TITLE_SCREENSHOTS_DONE,
            Field::FilesLocation => FIELD_TITLE_FILES_LOCATION,
            Field::Tagline => FIELD_TITLE_TAGLINE,
            Field::TaglineIdeas => FIELD_TITLE_TAGLINE_IDEAS,
            Field::OtherLogos => FIELD_TITLE_OTHER_LOGOS,
            Field::Title => FIELD_TITLE_TITLE,
            Field::Description => FIELD_TITLE_DESCRIPTION,
            Field::Highlight => FIELD_TITLE_HIGHLIGHT,
            Field::Tags => FIELD_TITLE_TAGS,
            Field::DescriptionTags => FIELD_TITLE_DESCRIPTION_TAGS,
            Field::TweetText => FIELD_TITLE_TWEET_TEXT,
            Field::AnimationsScript => FIELD_TITLE_ANIMATIONS_SCRIPT,
            Field::RequestThumbnail => FIELD_TITLE_REQUEST_THUMBNAIL,
            Field::ThumbnailPath => FIELD_TITLE_THUMBNAIL_PATH,
            Field::Members => FIELD_TITLE_MEMBERS,
            Field::RequestEdit => FIELD_TITLE_REQUEST_EDIT,
            Field::Timecodes => FIELD_TITLE_TIMECODES,
            Field::MovieDone => FIELD_TITLE_MOVIE_DONE,
            Field::SlidesDone => FIELD_TITLE_SLIDES_DONE,
            Field::VideoFilePath => FIELD_TITLE_VIDEO_FILE_PATH,
            Field::UploadToYoutube => FIELD_TITLE_UPLOAD_TO_YOUTUBE,
            Field::CreateHugoPost => FIELD_TITLE_CREATE_HUGO_POST,
            Field::BlueskyPost => FIELD_TITLE_BLUESKY_POST,
            Field::LinkedinPost => FIELD_TITLE_LINKEDIN_POST,
            Field::SlackPost => FIELD_TITLE_SLACK_POST,
            Field::YoutubeHighlight => FIELD_TITLE_YOUTUBE_HIGHLIGHT,
            Field::YoutubeComment => FIELD_TITLE_YOUTUBE_COMMENT,
            Field::YoutubeCommentReplies => FIELD_TITLE_YOUTUBE_COMMENT_REPLIES,
            Field::GdePost => FIELD_TITLE_GDE_POST,
            Field::CodeRepository => FIELD_TITLE_CODE_REPOSITORY,
            Field::NotifySponsors => FIELD_TITLE_NOTIFY_SPONSORS,
        }
    }

    /// The phase whose form owns this field.
    pub fn phase(self) -> Phase {
        match self {
            Field::ProjectName
            | Field::ProjectUrl
            | Field::SponsorshipAmount
            | Field::SponsorshipEmails
            | Field::SponsorshipBlocked
            | Field::PublishDate
            | Field::Delayed
            | Field::GistPath => Phase::InitialDetails,
            Field::CodeDone
            | Field::TalkingHeadDone
            | Field::ScreenRecordingDone
            | Field::RelatedVideos
            | Field::ThumbnailsDone
            | Field::DiagramsDone
            | Field::ScreenshotsDone
            | Field::FilesLocation
            | Field::Tagline
            | Field::TaglineIdeas
            | Field::OtherLogos => Phase::WorkProgress,
            Field::Title
            | Field::Description
            | Field::Highlight
            | Field::Tags
            | Field::DescriptionTags
            | Field::TweetText
            | Field::AnimationsScript
            | Field::RequestThumbnail => Phase::Definition,
            Field::ThumbnailPath
            | Field::Members
            | Field::RequestEdit
            | Field::Timecodes
            | Field::MovieDone
            | Field::SlidesDone => Phase::PostProduction,
            Field::VideoFilePath
            | Field::UploadToYoutube
            | Field::CreateHugoPost => Phase::PublishingDetails,
            Field::BlueskyPost
            | Field::LinkedinPost
            | Field::SlackPost
            | Field::YoutubeHighlight
            | Field::YoutubeComment
            | Field::YoutubeCommentReplies
            | Field::GdePost
            | Field::CodeRepository
            | Field::NotifySponsors => Phase::PostPublish,
        }
    }

    /// Stable snake_case identifier. Serialization writes this key.
    pub fn key(self) -> &'static str {
        match self {
            Field::ProjectName => "project_name",
            Field::ProjectUrl => "project_url",
            Field::SponsorshipAmount => "sponsorship_amount",
            Field::SponsorshipEmails => "sponsorship_emails",
            Field::SponsorshipBlocked => "sponsorship_blocked",
            Field::PublishDate => "publish_date",
            Field::Delayed => "delayed",
            Field::GistPath => "gist_path",
            Field::CodeDone => "code_done",
            Field::TalkingHeadDone => "talking_head_done",
            Field::ScreenRecordingDone => "screen_recording_done",
            Field::RelatedVideos => "related_videos",
            Field::ThumbnailsDone => "thumbnails_done",
            Field::DiagramsDone => "diagrams_done",
            Field::ScreenshotsDone => "screenshots_done",
            Field::FilesLocation => "files_location",
            Field::Tagline => "tagline",
            Field::TaglineIdeas => "tagline_ideas",
            Field::OtherLogos => "other_logos",
            Field::Title => "title",
            Field::Description => "description",
            Field::Highlight => "highlight",
            Field::Tags => "tags",
            Field::DescriptionTags => "description_tags",
            Field::TweetText => "tweet_text",
            Field::AnimationsScript => "animations_script",
            Field::RequestThumbnail => "request_thumbnail",
            Field::ThumbnailPath => "thumbnail_path",
            Field::Members => "members",
            Field::RequestEdit => "request_edit",
            Field::Timecodes => "timecodes",
            Field::MovieDone => "movie_done",
            Field::SlidesDone => "slides_done",
            Field::VideoFilePath => "video_file_path",
            Field::UploadToYoutube => "upload_to_youtube",
            Field::CreateHugoPost => "create_hugo_post",
            Field::BlueskyPost => "bluesky_post",
            Field::LinkedinPost => "linkedin_post",
            Field::SlackPost => "slack_post",
            Field::YoutubeHighlight => "youtube_highlight",
            Field::YoutubeComment => "youtube_comment",
            Field::YoutubeCommentReplies => "youtube_comment_replies",
            Field::GdePost => "gde_post",
            Field::CodeRepository => "code_repository",
            Field::NotifySponsors => "notify_sponsors",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
