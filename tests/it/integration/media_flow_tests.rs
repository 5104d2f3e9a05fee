//! Media acquisition flows: picks, cancellations, voice notes.

use crate::helpers::{ScriptedMedia, assert_item_count, item};
use moodart::constants::MIC_PERMISSION_MESSAGE;
use moodart::error::AcquisitionError;
use moodart::media::{AcquiredMedia, MediaRequest, RecorderState, VoiceRecorder};
use moodart::{Board, ItemContent, MediaHandle};

#[test]
fn test_cancelled_image_pick_leaves_no_item() {
    let mut board = Board::new();
    let mut source = ScriptedMedia::default().failure(AcquisitionError::Cancelled);

    let result = board.pick_image(&mut source);
    assert_eq!(result, Err(AcquisitionError::Cancelled));
    assert_item_count(&board, 0);
    assert_eq!(board.selected(), None);
    assert_eq!(source.requests, vec![MediaRequest::ImageFile]);
}

#[test]
fn test_image_pick_fills_provisional_item() {
    let mut board = Board::new();
    let mut source = ScriptedMedia::default().file("blob:photo", "photo.png");

    let id = board.pick_image(&mut source).unwrap();
    assert_item_count(&board, 1);
    let image = item(&board, id);
    assert_eq!(image.size, (320.0, 220.0));
    assert_eq!(
        image.content,
        ItemContent::Image {
            src: MediaHandle::new("blob:photo")
        }
    );
    assert_eq!(board.pending_image(), None);
}

#[test]
fn test_filled_image_survives_later_failure() {
    let mut board = Board::new();
    let id = board.add_image();
    board
        .complete_image_pick(Ok(AcquiredMedia::new(MediaHandle::new("blob:a"))))
        .unwrap();

    // A stray failure with nothing pending removes nothing
    let _ = board.complete_image_pick(Err(AcquisitionError::Failed("read error".into())));
    assert!(board.items().contains(id));
}

#[test]
fn test_pick_completes_after_placeholder_removed() {
    let mut board = Board::new();
    let placeholder = board.add_image();
    board.remove_item(placeholder);

    let id = board
        .complete_image_pick(Ok(AcquiredMedia::new(MediaHandle::new("blob:late"))))
        .unwrap();
    assert_ne!(id, placeholder);
    assert_eq!(board.selected(), Some(id));
    assert_item_count(&board, 1);
}

#[test]
fn test_audio_and_video_take_file_names() {
    let mut board = Board::new();
    let mut source = ScriptedMedia::default()
        .file("blob:song", "song.mp3")
        .file("blob:clip", "clip.mp4");

    let audio = board.pick_audio(&mut source).unwrap();
    let video = board.pick_video(&mut source).unwrap();

    assert_eq!(item(&board, audio).content.title(), Some("song.mp3"));
    assert_eq!(item(&board, audio).size, (300.0, 80.0));
    assert_eq!(item(&board, video).content.title(), Some("clip.mp4"));
    assert_eq!(item(&board, video).size, (480.0, 270.0));
    assert_eq!(board.selected(), Some(video));
}

#[test]
fn test_failed_audio_pick_creates_nothing() {
    let mut board = Board::new();
    let mut source = ScriptedMedia::default().failure(AcquisitionError::Cancelled);
    assert!(board.pick_audio(&mut source).is_err());
    assert_item_count(&board, 0);
}

#[test]
fn test_voice_note_flow() {
    let mut board = Board::new();
    let mut recorder = VoiceRecorder::new();

    recorder.start(Ok(())).unwrap();
    let clip = recorder.stop(Ok(MediaHandle::new("blob:voice"))).unwrap();
    let id = board.add_voice_note(clip);

    assert_eq!(item(&board, id).content.title(), Some("Voice Note"));
    assert_eq!(recorder.state(), &RecorderState::Idle);
}

#[test]
fn test_microphone_denied_reports_message() {
    let mut recorder = VoiceRecorder::new();
    let err = recorder.start(Err(AcquisitionError::PermissionDenied)).unwrap_err();
    assert_eq!(err.to_string(), MIC_PERMISSION_MESSAGE);
    assert!(!recorder.is_recording());
}

#[test]
fn test_accept_filters() {
    assert_eq!(MediaRequest::ImageFile.accept(), Some("image/*"));
    assert_eq!(MediaRequest::Microphone.accept(), None);
}
