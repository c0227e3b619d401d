use super::*;
use crate::foundation::error::SlidecastError;
use crate::model::request::TtsRequest;
use crate::model::slide::BrandKit;

struct Unused;

impl SlideRasterizer for Unused {
    fn render(
        &mut self,
        _slide: &Slide,
        _out: &Path,
        _format: crate::model::request::AspectFormat,
        _brand: Option<&BrandKit>,
    ) -> SlidecastResult<PathBuf> {
        Err(SlidecastError::render("unused"))
    }
}

impl Narrator for Unused {
    fn synthesize(&self, _request: &TtsRequest) -> SlidecastResult<String> {
        Err(SlidecastError::narration("unused"))
    }
}

impl MediaToolchain for Unused {
    fn probe_duration(&self, _audio: &Path) -> SlidecastResult<f64> {
        Err(SlidecastError::video_generation("unused"))
    }
    fn encode_segment(&self, _job: &SegmentJob) -> SlidecastResult<()> {
        Err(SlidecastError::video_generation("unused"))
    }
    fn concat(&self, _manifest: &Path, _out_path: &Path) -> SlidecastResult<()> {
        Err(SlidecastError::video_generation("unused"))
    }
}

impl MediaFetcher for Unused {
    fn fetch(&self, _locator: &str) -> SlidecastResult<Vec<u8>> {
        Err(SlidecastError::validation("unused"))
    }
}

fn assembler() -> VideoAssembler {
    VideoAssembler::new(
        Box::new(Unused),
        Box::new(Unused),
        Box::new(Unused),
        Box::new(Unused),
    )
}

#[test]
fn empty_request_is_rejected_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let err = assembler()
        .assemble(&RenderRequest::new("t", Vec::new()), &out)
        .unwrap_err();
    assert!(matches!(err, SlidecastError::Validation(_)));
    assert!(!out.exists());
}

#[test]
fn scratch_dirs_are_created_under_configured_parent() {
    let parent = tempfile::tempdir().unwrap();
    let nested = parent.path().join("scratch");
    let a = assembler().with_scratch_dir(&nested);
    let scratch = a.scratch_dir().unwrap();
    assert!(scratch.path().starts_with(&nested));
    assert!(
        scratch
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("slidecast-")
    );
    let kept = scratch.path().to_path_buf();
    drop(scratch);
    assert!(!kept.exists());
}

#[test]
fn render_failure_removes_scratch() {
    let parent = tempfile::tempdir().unwrap();
    let out = parent.path().join("out");
    let err = assembler()
        .with_scratch_dir(parent.path().join("scratch"))
        .assemble(&RenderRequest::new("t", vec![Slide::new("a")]), &out)
        .unwrap_err();
    assert!(matches!(err, SlidecastError::Render(_)));
    let leftovers = std::fs::read_dir(parent.path().join("scratch")).unwrap().count();
    assert_eq!(leftovers, 0);
}

#[test]
fn discard_partial_removes_existing_file_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.mp4");
    std::fs::write(&path, b"partial").unwrap();
    discard_partial(&path);
    assert!(!path.exists());
    discard_partial(&path);
}
