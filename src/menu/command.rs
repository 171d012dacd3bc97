/// 主選單指令，輸入去除前後空白後比對
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    RenamePhotos,
    CleanTable,
    Exit,
}

impl MenuCommand {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::RenamePhotos),
            "2" => Some(Self::CleanTable),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}
