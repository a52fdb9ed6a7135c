#![allow(dead_code)]

//! テスト用のスケール

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use weighpro::{ScaleLink, WeightReader};

/// 決められた行を順に返すスケール。行が尽きたら空行（タイムアウト相当）
pub struct ScriptedScale {
    lines: VecDeque<Vec<u8>>,
    pub discards: Rc<Cell<usize>>,
    pub reads: Rc<Cell<usize>>,
}

impl ScriptedScale {
    pub fn new(lines: &[&[u8]]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_vec()).collect(),
            discards: Rc::new(Cell::new(0)),
            reads: Rc::new(Cell::new(0)),
        }
    }
}

impl ScaleLink for ScriptedScale {
    fn discard_input(&mut self) -> io::Result<()> {
        self.discards.set(self.discards.get() + 1);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// 読み取りで必ずI/Oエラーになるスケール
pub struct BrokenScale;

impl ScaleLink for BrokenScale {
    fn discard_input(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
    }
}

/// 待機なしのリーダーを作成
pub fn reader_with(link: impl ScaleLink + 'static) -> WeightReader {
    WeightReader::new(Some(Box::new(link))).with_settle(Duration::ZERO)
}
