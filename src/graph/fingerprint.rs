use xxhash_rust::xxh3::Xxh3;

use crate::graph::ops::{
    EofPolicy, Op, OpId, PadAmount, PadFill, PadSide, StreamKind, TextOptions, TimePoint,
};
use crate::graph::plan::RenderGraph;
use crate::style::color::Color;
use crate::style::node::AudioSystem;

const XXH3_SEED: u64 = 0x5f3c_91a2_d84e_07b6;

/// 128-bit structural hash of a [`RenderGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for GraphFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_graph(graph: &RenderGraph) -> GraphFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(graph.ops.len() as u32);
    for op in &graph.ops {
        write_op(&mut h, op);
    }
    write_opt_id(&mut h, graph.video);
    write_opt_id(&mut h, graph.audio);
    match graph.duration {
        Some(d) => {
            h.write_u8(1);
            h.write_f64(d);
        }
        None => h.write_u8(0),
    }
    h.finish()
}

impl RenderGraph {
    pub fn fingerprint(&self) -> GraphFingerprint {
        fingerprint_graph(self)
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> GraphFingerprint {
        let v = self.inner.digest128();
        GraphFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_id(h: &mut StableHasher, id: OpId) {
    h.write_u32(id.0);
}

fn write_opt_id(h: &mut StableHasher, id: Option<OpId>) {
    match id {
        Some(id) => {
            h.write_u8(1);
            write_id(h, id);
        }
        None => h.write_u8(0),
    }
}

fn write_opt<T>(h: &mut StableHasher, v: &Option<T>, f: impl FnOnce(&mut StableHasher, &T)) {
    match v {
        Some(v) => {
            h.write_u8(1);
            f(h, v);
        }
        None => h.write_u8(0),
    }
}

fn write_color(h: &mut StableHasher, c: &Color) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_time_point(h: &mut StableHasher, t: &TimePoint) {
    match t {
        TimePoint::Frame(n) => {
            h.write_u8(0);
            h.write_u64(*n);
        }
        TimePoint::Second(s) => {
            h.write_u8(1);
            h.write_f64(*s);
        }
    }
}

fn write_audio_system(h: &mut StableHasher, a: &AudioSystem) {
    h.write_u8(match a {
        AudioSystem::Monaural => 0,
        AudioSystem::Stereo => 1,
    });
}

fn write_text_options(h: &mut StableHasher, o: &TextOptions) {
    write_opt(h, &o.font, |h, s| h.write_str(s));
    write_opt(h, &o.size, |h, v| h.write_i32(*v));
    write_opt(h, &o.color, write_color);
    write_opt(h, &o.border_color, write_color);
    write_opt(h, &o.border_width, |h, v| h.write_u32(*v));
}

fn write_op(h: &mut StableHasher, op: &Op) {
    match op {
        Op::Input { path, kind, looped } => {
            h.write_u8(0);
            h.write_str(&path.to_string_lossy());
            h.write_str(kind.as_str());
            h.write_bool(*looped);
        }
        Op::Select { input, stream } => {
            h.write_u8(1);
            write_id(h, *input);
            h.write_u8(match stream {
                StreamKind::Video => 0,
                StreamKind::Audio => 1,
            });
        }
        Op::Trim { src, start, end } => {
            h.write_u8(2);
            write_id(h, *src);
            write_opt(h, start, write_time_point);
            write_opt(h, end, write_time_point);
        }
        Op::PadTime {
            src,
            side,
            amount,
            fill,
        } => {
            h.write_u8(3);
            write_id(h, *src);
            h.write_u8(match side {
                PadSide::Start => 0,
                PadSide::End => 1,
            });
            match amount {
                PadAmount::Frames(n) => {
                    h.write_u8(0);
                    h.write_u64(*n);
                }
                PadAmount::Seconds(s) => {
                    h.write_u8(1);
                    h.write_f64(*s);
                }
                PadAmount::UntilSeconds(s) => {
                    h.write_u8(2);
                    h.write_f64(*s);
                }
                PadAmount::Open => h.write_u8(3),
            }
            match fill {
                PadFill::Color(c) => {
                    h.write_u8(0);
                    write_color(h, c);
                }
                PadFill::Clone => h.write_u8(1),
                PadFill::Silence => h.write_u8(2),
            }
        }
        Op::Overlay {
            base,
            overlay,
            x,
            y,
            eof,
        } => {
            h.write_u8(4);
            write_id(h, *base);
            write_id(h, *overlay);
            h.write_i32(*x);
            h.write_i32(*y);
            h.write_u8(match eof {
                EofPolicy::EndAll => 1,
                EofPolicy::Pass => 2,
            });
        }
        Op::DelayAudio { src, millis } => {
            h.write_u8(5);
            write_id(h, *src);
            h.write_u64(*millis);
        }
        Op::MixAudio { a, b } => {
            h.write_u8(6);
            write_id(h, *a);
            write_id(h, *b);
        }
        Op::SetSampleAspect { src, num, den } => {
            h.write_u8(7);
            write_id(h, *src);
            h.write_u32(*num);
            h.write_u32(*den);
        }
        Op::DrawText {
            canvas,
            text,
            x,
            y,
            options,
        } => {
            h.write_u8(8);
            write_id(h, *canvas);
            h.write_str(text);
            h.write_i32(*x);
            h.write_i32(*y);
            write_text_options(h, options);
        }
        Op::SolidColor {
            width,
            height,
            color,
        } => {
            h.write_u8(9);
            h.write_u32(*width);
            h.write_u32(*height);
            write_color(h, color);
        }
        Op::Scale { src, width, height } => {
            h.write_u8(10);
            write_id(h, *src);
            write_opt(h, width, |h, v| h.write_u32(*v));
            write_opt(h, height, |h, v| h.write_u32(*v));
        }
        Op::ScaleVolume { src, factor } => {
            h.write_u8(11);
            write_id(h, *src);
            h.write_f64(*factor);
        }
        Op::SetChannelLayout { src, from, to } => {
            h.write_u8(12);
            write_id(h, *src);
            write_opt(h, from, write_audio_system);
            write_audio_system(h, to);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/fingerprint.rs"]
mod tests;
