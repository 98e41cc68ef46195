use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::error::AssemblyError;
use super::model::AudioClip;

/// The concatenated MP3 stream and its total decoded duration.
#[derive(Debug, Clone)]
pub struct AssembledAudio {
    pub data: Vec<u8>,
    pub duration_seconds: f64,
}

/// Concatenate per-line clips into one MP3 stream, in input order.
///
/// Every clip must probe as MPEG audio; one bad clip fails the whole
/// assembly naming its line index. MP3 frames are self-contained, so the
/// container-level concatenation is a plain byte concatenation with no
/// trimming or silence insertion. An empty input is refused: a zero-length
/// "podcast" is never produced.
pub fn assemble(clips: &[AudioClip]) -> Result<AssembledAudio, AssemblyError> {
    if clips.is_empty() {
        return Err(AssemblyError::Empty);
    }

    let mut data = Vec::new();
    let mut duration_seconds = 0.0;

    for clip in clips {
        let clip_duration =
            probe_clip(&clip.data).map_err(|reason| AssemblyError::InvalidClip {
                index: clip.line_index,
                reason,
            })?;

        duration_seconds += clip_duration;
        data.extend_from_slice(&clip.data);
    }

    tracing::info!(
        clips = clips.len(),
        total_bytes = data.len(),
        duration_seconds = format!("{duration_seconds:.2}"),
        "Audio assembly complete"
    );

    Ok(AssembledAudio {
        data,
        duration_seconds,
    })
}

/// Walk every frame of a clip, returning its duration in seconds.
///
/// Reading all packets both validates the stream structure and sums the
/// per-frame durations; no PCM decode is needed for either.
fn probe_clip(data: &[u8]) -> Result<f64, String> {
    let cursor = std::io::Cursor::new(data.to_vec());
    let stream = MediaSourceStream::new(Box::new(cursor), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    hint.with_extension("mp3");

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| format!("not recognizable as MPEG audio: {e}"))?;

    let mut format = probed.format;

    let time_base = format
        .default_track()
        .ok_or_else(|| "no audio track".to_string())?
        .codec_params
        .time_base;

    let mut frames = 0usize;
    let mut total_duration = 0u64;

    loop {
        match format.next_packet() {
            Ok(packet) => {
                total_duration += packet.dur;
                frames += 1;
            }
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(format!("invalid audio stream: {e}")),
        }
    }

    if frames == 0 {
        return Err("contains no audio frames".to_string());
    }

    let duration_seconds = match time_base {
        Some(tb) => {
            let time = tb.calc_time(total_duration);
            time.seconds as f64 + time.frac
        }
        None => 0.0,
    };

    Ok(duration_seconds)
}
