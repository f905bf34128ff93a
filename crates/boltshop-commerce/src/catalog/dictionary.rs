//! Phrase dictionaries for filename tokens.
//!
//! Asset filenames are unaccented Vietnamese run together
//! (`bulonglucgiac`), so each known token maps to a display phrase per
//! locale. Unknown tokens fall back to capitalisation in the naming code.

use crate::locale::Locale;

/// Look up the display phrase for a filename token.
pub fn phrase(token: &str, locale: Locale) -> Option<&'static str> {
    match locale {
        Locale::Vi => vi_phrase(token),
        Locale::En => en_phrase(token),
    }
}

fn vi_phrase(token: &str) -> Option<&'static str> {
    let phrase = match token {
        "botuocnovit" => "Bộ Tuốc Nơ Vít",
        "dinhruttanrutchotchechotpin" => "Đinh rút, tán rút, chốt chẻ, chốt pin",
        "longdendemphangvenh" => "Lông đền đệm phẳng vênh",
        "thanhrenmongcumuno" => "Thanh ren, cùm u, bu lông nở",
        "bovitinoxhopnhua" => "Bộ vít inox hộp nhựa",
        "tandong" => "Tán đồng",
        "bokhau" => "Bộ Khẩu",
        "buacaosu" => "Búa Cao Su",
        "maykhoan" => "Máy Khoan",
        "thuocthang" => "Thước thẳng inox",
        "thuoccuon" => "Thước Cuộn",
        "thuocdo" => "Thước cặp",
        "lucgiacdanang" => "Lục Giác Đa Năng",
        "lucgiacchim" => "Lục Giác Chìm",
        "daioc" => "Đai Ốc",
        "daioclucgiac" => "Đai Ốc Lục Giác",
        "longden" => "Long Đền",
        "demphang" => "Đệm Phẳng",
        "venh" => "Vênh",
        "vitcacloai" => "Vít Các Loại",
        "vit" => "Vít",
        "lienphang" => "Liên Phẳng",
        "bulongrensuot" => "Bulong Ren Suốt",
        "bulonglucgiac" => "Bulong Lục Giác",
        "matmoccau" => "Mắt Móc Cầu",
        "lienketchiuluccao" => "Liên Kết Chịu Lực Cao",
        "daubake" => "Đầu Bake",
        "nhua" => "Ốc vít nhựa",
        "inox" => "Ốc vít inox",
        "occhup" => "Ốc Chụp",
        "daiocchupinox" => "Đai Ốc Chụp Inox",
        "daiocchupinoxbong" => "Đai Ốc Chụp Inox Bóng",
        "dautroncovuong" => "Đầu Tròn Cổ Vuông",
        "dinhghimkimloai" => "Đinh ghim kim loại",
        "lienlongden" => "Liên Long Đền",
        "dinhrut" => "Đinh Rút",
        "tanrut" => "Tán Rút",
        "chotche" => "Chốt Chẻ",
        "chotpin" => "Chốt Pin",
        "thanhren" => "Thanh Ren",
        "mong" => "Mỏng",
        "cumu" => "Cùm U",
        "no" => "Nở",
        "chot" => "Khóa móc treo",
        "chot1" => "Chốt cửa ngang",
        "chot2" => "Then trượt đôi",
        "va" => "Và",
        "chotinox" => "Khóa Gài Lò Xo",
        "chotinox1" => "Khóa gài kẹp",
        "kepchotkimloai" => "Khóa kẹp nhanh",
        "vachot3" => "Khóa tay gạt âm cửa",
        "vachot4" => "Then cài cửa có tai khóa",
        "phoithep" => "Phôi Thép",
        "thanhthepvuong" => "Thanh Thép Vuông",
        "thanhtheptrondac" => "Thanh Thép Tròn Đặc",
        "thanhthepdet" => "Thanh Thép Dẹt",
        "thepgocv" => "Thép Góc V",
        "thepi" => "Thép I",
        "thepu" => "Thép U",
        "thepcayxaydung" => "Thép Cây Xây Dựng",
        "theptrondac" => "Thép Tròn Đặc",
        "ongtheptron" => "Ống Thép Tròn",
        "octhepchunhat" => "Ống Thép Chữ Nhật",
        "theptamtron" => "Thép Tấm Tròn",
        "theptamcannguoi" => "Thép Tấm Cán Nguội",
        "theptamcannong" => "Thép Tấm Cán Nóng",
        "ocvitdacbiet" => "Ốc Vít Đặc Biệt",
        "boocvithogiadinh" => "Bộ Ốc Vít Hộ Gia Đình",
        "vitlienphangvenh" => "Vít Liên Phẳng Vênh",
        "bulonggiadinh" => "Bulong Gia Đình",
        "bulong" => "Bulong",
        "ocvit" => "Ốc Vít",
        "khoa" => "Ổ khóa móc",
        "cole" => "Cờ Lê",
        "kim" => "Kìm",
        "bua" => "Búa",
        "ov" => "Ốc vít",
        _ => return None,
    };
    Some(phrase)
}

fn en_phrase(token: &str) -> Option<&'static str> {
    let phrase = match token {
        "lienketchiuluccao" => "High-Strength Fastener",
        "boocvithogiadinh" => "Household Screw Set",
        "lienlongden" => "Bonded Washer",
        "nhua" => "Plastic Screw",
        "ocvitdacbiet" => "Special Purpose Screw",
        "vitlienphangvenh" => "Screw with Flat & Spring Washer",
        "bulonggiadinh" => "General Purpose Bolt",
        "daiocchupinoxbong" => "Polished Stainless Steel Cap Nut",
        "ocvit" => "Screw",
        "dinhghimkimloai" => "Metal Staple Pin",
        "thepcayxaydung" => "Reinforcing Steel Bar (Rebar)",
        "theptamcannguoi" => "Cold Rolled Steel Sheet",
        "theptamcannong" => "Hot Rolled Steel Sheet",
        "theptrondac" => "Solid Round Steel Bar",
        "botuocnovit" => "Screwdriver Set",
        "vachot3" => "Mortise Lever Lock",
        "vachot4" => "Barrel Bolt with Padlock Staple",
        "dinhruttanrutchotchechotpin" => "Blind Rivet, Rivet Nut, Cotter Pin, Dowel Pin",
        "longdendemphangvenh" => "Flat Washer & Spring Washer",
        "thanhrenmongcumuno" => "Threaded Rod, U-Bolt, Expansion Anchor",
        "bovitinoxhopnhua" => "Stainless Screw Set (Box)",
        "tandong" => "Brass Drop-in Anchor",
        "bokhau" => "Socket Set",
        "buacaosu" => "Rubber Hammer",
        "maykhoan" => "Drill Machine",
        "thuocthang" => "Steel Ruler",
        "thuoccuon" => "Measuring Tape",
        "thuocdo" => "Vernier Caliper",
        "lucgiacdanang" => "Multi Hex Key",
        "lucgiacchim" => "Allen Key",
        "daioc" => "Nut",
        "daioclucgiac" => "Hex Nut",
        "longden" => "Washer",
        "demphang" => "Flat Washer",
        "venh" => "Spring Washer",
        "vitcacloai" => "Various Screws",
        "vit" => "Screw",
        "bulongrensuot" => "Fully Threaded Bolt",
        "bulonglucgiac" => "Hex Bolt",
        "matmoccau" => "Eye Bolt",
        "daubake" => "Phillips Head",
        "inox" => "Stainless Steel Screw",
        "occhup" => "Cap Nut",
        "daiocchupinox" => "Stainless Cap Nut",
        "dautroncovuong" => "Carriage Bolt",
        "dinhrut" => "Blind Rivet",
        "tanrut" => "Rivet Nut",
        "chotche" => "Cotter Pin",
        "chotpin" => "Dowel Pin",
        "thanhren" => "Threaded Rod",
        "cumu" => "U-Bolt",
        "no" => "Expansion Anchor",
        "chot" => "Padlock",
        "chot1" => "Barrel Bolt",
        "chot2" => "Sliding Bolt",
        "chotinox" => "Spring Toggle Latch",
        "kepchotkimloai" => "Toggle Clamp",
        "phoithep" => "Steel Billet",
        "thanhthepvuong" => "Square Steel Bar",
        "thanhtheptrondac" => "Solid Round Bar",
        "thanhthepdet" => "Flat Bar",
        "thepgocv" => "Angle Bar (V)",
        "thepi" => "I Beam",
        "thepu" => "U Channel",
        "ongtheptron" => "Round Steel Pipe",
        "octhepchunhat" => "Rectangular Steel Tube",
        "theptamtron" => "Round Steel Plate",
        "bulong" => "Bolt",
        "khoa" => "Padlock",
        "bua" => "Hammer",
        "kim" => "Pliers",
        "cole" => "Wrench",
        _ => return None,
    };
    Some(phrase)
}
