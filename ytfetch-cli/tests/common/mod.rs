// ytfetch-cli/tests/common/mod.rs
//
// A stand-in yt-dlp written as a POSIX shell script. It understands just
// enough of the command line ytfetch-core builds:
// - `--dump-single-json` prints a fixed info JSON
// - otherwise it prints two progress lines and creates the output file
// - URLs containing "bad" fail extraction, "forbidden" fails the download

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const FAKE_INFO_JSON: &str = r#"{"title": "Fake Clip", "duration": 42, "formats": [{"format_id": "22", "ext": "mp4", "resolution": "1280x720", "format_note": "720p", "height": 720}, {"format_id": "140", "ext": "m4a", "resolution": "audio only", "format_note": "medium"}, {"format_id": "18", "ext": "mp4", "resolution": "640x360", "format_note": "360p", "height": 360}]}"#;

pub fn fake_ytdlp_script() -> String {
    format!(
        r#"#!/bin/sh
mode=download
out=""
url=""
while [ $# -gt 0 ]; do
  case "$1" in
    --dump-single-json) mode=info ;;
    -o) shift; out="$1" ;;
    --) shift; url="$1" ;;
  esac
  shift
done

case "$url" in
  *bad*) echo "ERROR: [generic] Unsupported URL: $url" >&2; exit 1 ;;
esac

if [ "$mode" = info ]; then
  printf '%s\n' '{json}'
  exit 0
fi

case "$url" in
  *forbidden*) echo "ERROR: unable to download video data: HTTP Error 403: Forbidden" >&2; exit 1 ;;
esac

echo "[download] Destination: Fake Clip.mp4"
echo "ytfetch-progress|downloading|  50.0%|  1.00MiB/s|00:01"
echo "ytfetch-progress|finished|100.0%|NA|NA"
dir=$(dirname "$out")
mkdir -p "$dir"
: > "$dir/Fake Clip.mp4"
"#,
        json = FAKE_INFO_JSON
    )
}

/// Writes the fake yt-dlp into `dir` and returns its path.
#[cfg(unix)]
pub fn install_fake_ytdlp(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-yt-dlp");
    fs::write(&path, fake_ytdlp_script()).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
