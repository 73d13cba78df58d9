#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[default]
    Off,
    Requesting,
    Live,
    Denied,
}

/// Whether the live demo is open and the camera is streaming. The
/// sequencer only runs while both hold.
///
/// Every `open` carries the id of the camera request it starts; answers
/// that carry another id belong to an earlier opening and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSession {
    pub demo_open: bool,
    pub camera: CameraStatus,
    pub request: u64,
}

impl DemoSession {
    pub fn open(self, request: u64) -> Self {
        Self {
            demo_open: true,
            camera: CameraStatus::Requesting,
            request,
        }
    }

    fn answers(&self, request: u64) -> bool {
        self.demo_open && self.request == request
    }

    pub fn camera_granted(self, request: u64) -> Self {
        if !self.answers(request) || self.camera != CameraStatus::Requesting {
            return self;
        }
        Self { camera: CameraStatus::Live, ..self }
    }

    pub fn camera_denied(self, request: u64) -> Self {
        if !self.answers(request) {
            return self;
        }
        Self { camera: CameraStatus::Denied, ..self }
    }

    pub fn end(self) -> Self {
        Self::default()
    }

    pub fn monitoring(&self) -> bool {
        self.demo_open && self.camera == CameraStatus::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitoring_needs_open_demo_and_live_camera() {
        let session = DemoSession::default().open(1);
        assert!(!session.monitoring());
        assert!(session.camera_granted(1).monitoring());
    }

    #[test]
    fn denial_keeps_demo_open_but_never_monitors() {
        let session = DemoSession::default().open(1).camera_denied(1);
        assert!(session.demo_open);
        assert_eq!(session.camera, CameraStatus::Denied);
        assert!(!session.monitoring());
        // A grant that arrives after a denial does not count.
        assert!(!session.camera_granted(1).monitoring());
    }

    #[test]
    fn late_grant_after_end_is_ignored() {
        let ended = DemoSession::default().open(1).end();
        assert_eq!(ended.camera_granted(1), DemoSession::default());
        assert_eq!(ended.camera_denied(1), DemoSession::default());
    }

    #[test]
    fn grant_from_an_earlier_opening_does_not_count() {
        let reopened = DemoSession::default().open(1).end().open(2);

        let stale = reopened.camera_granted(1);
        assert_eq!(stale.camera, CameraStatus::Requesting);
        assert!(!stale.monitoring());
        assert_eq!(reopened.camera_denied(1), reopened);

        assert!(stale.camera_granted(2).monitoring());
    }

    #[test]
    fn reopening_requests_the_camera_again() {
        let session = DemoSession::default().open(1).camera_denied(1).end().open(2);
        assert_eq!(session.camera, CameraStatus::Requesting);
        assert_eq!(session.request, 2);
    }
}
