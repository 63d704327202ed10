/// The fixed set of messages the lead form can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    MissingInformation,
    InvalidEmail,
    SubmissionFailed,
    GuideDownloading,
    GuideDownloadFailed,
    RequestReceived,
    DownloadOffer,
    DownloadUnavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    DownloadGuide,
}

impl NoticeAction {
    pub fn label(self) -> &'static str {
        match self {
            NoticeAction::DownloadGuide => "Download PDF",
        }
    }
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::MissingInformation => "Missing information",
            Notice::InvalidEmail => "Invalid email",
            Notice::SubmissionFailed => "Something went wrong",
            Notice::GuideDownloading | Notice::GuideDownloadFailed => "Success!",
            Notice::RequestReceived => "Thank you!",
            Notice::DownloadOffer => "Your guide is ready",
            Notice::DownloadUnavailable => "Download unavailable",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notice::MissingInformation => "Please fill in all required fields.",
            Notice::InvalidEmail => "Please enter a valid email address.",
            Notice::SubmissionFailed => "Unable to process your request. Please try again later.",
            Notice::GuideDownloading => "Your free franchise guide is downloading now!",
            Notice::GuideDownloadFailed => "Thank you for your submission! There was an issue with the automatic download. Please check your email for the guide.",
            Notice::RequestReceived => "We received your request and will be in touch soon.",
            Notice::DownloadOffer => "Click below to download your free franchise guide.",
            Notice::DownloadUnavailable => "There was an issue with the download. Please check your email for the guide.",
        }
    }

    pub fn variant(self) -> NoticeVariant {
        match self {
            Notice::MissingInformation
            | Notice::InvalidEmail
            | Notice::SubmissionFailed
            | Notice::DownloadUnavailable => NoticeVariant::Destructive,
            _ => NoticeVariant::Default,
        }
    }

    pub fn action(self) -> Option<NoticeAction> {
        match self {
            Notice::DownloadOffer => Some(NoticeAction::DownloadGuide),
            _ => None,
        }
    }
}

/// A notice and how long to wait before showing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledNotice {
    pub notice: Notice,
    pub delay_ms: u32,
}

impl ScheduledNotice {
    pub fn now(notice: Notice) -> Self {
        Self { notice, delay_ms: 0 }
    }

    pub fn after(notice: Notice, delay_ms: u32) -> Self {
        Self { notice, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_offer_has_action() {
        assert_eq!(Notice::DownloadOffer.action(), Some(NoticeAction::DownloadGuide));
        assert_eq!(Notice::GuideDownloading.action(), None);
        assert_eq!(NoticeAction::DownloadGuide.label(), "Download PDF");
    }

    #[test]
    fn test_failures_are_destructive() {
        assert_eq!(Notice::InvalidEmail.variant(), NoticeVariant::Destructive);
        assert_eq!(Notice::SubmissionFailed.variant(), NoticeVariant::Destructive);
        assert_eq!(Notice::RequestReceived.variant(), NoticeVariant::Default);
    }
}
