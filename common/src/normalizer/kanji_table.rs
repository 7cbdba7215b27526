//! 旧字体→新字体テーブル
//!
//! JIS旧字体と対応する新字体。`OLD_KANJI` と `NEW_KANJI` は同じ位置の文字が対応する。

/// 旧字体（294字）
pub(crate) const OLD_KANJI: &[&str] = &[
    "亞圍壹榮驛應櫻假會懷覺樂陷歡氣戲據挾區徑溪輕藝儉圈",
    "權嚴恆國齋雜蠶殘兒實釋從縱敍燒條剩壤釀眞盡醉髓聲竊",
    "淺錢禪爭插騷屬對滯擇單斷癡鑄敕鐵傳黨鬪屆腦廢發蠻拂",
    "邊瓣寶沒滿藥餘樣亂兩禮靈爐灣惡醫飮營圓歐奧價繪擴學",
    "罐勸觀歸犧擧狹驅莖經繼缺劍檢顯廣鑛碎劑參慘絲辭舍壽",
    "澁肅將證乘疊孃觸寢圖穗樞齊攝戰潛雙莊裝藏續體臺澤膽",
    "彈蟲廳鎭點燈盜獨貳霸賣髮祕佛變辯豐飜默與譽謠覽獵勵",
    "齡勞壓爲隱衞鹽毆穩畫壞殼嶽卷關顏僞舊峽曉勳惠螢鷄縣",
    "險獻驗效號濟册棧贊齒濕寫收獸處稱奬淨繩讓囑愼粹隨數",
    "靜專踐纖壯搜總臟墮帶瀧擔團遲晝聽遞轉當稻讀惱拜麥拔",
    "濱竝辨舖襃萬譯豫搖來龍壘隸戀樓鰺鶯蠣攪竈灌諫頸礦蘂",
    "靱賤壺礪檮濤邇蠅檜儘藪籠彌麩栁塚淵舟曾",
];

/// 新字体（`OLD_KANJI` と同順）
pub(crate) const NEW_KANJI: &[&str] = &[
    "亜囲壱栄駅応桜仮会懐覚楽陥歓気戯拠挟区径渓軽芸倹圏",
    "権厳恒国斎雑蚕残児実釈従縦叙焼条剰壌醸真尽酔髄声窃",
    "浅銭禅争挿騒属対滞択単断痴鋳勅鉄伝党闘届脳廃発蛮払",
    "辺弁宝没満薬余様乱両礼霊炉湾悪医飲営円欧奥価絵拡学",
    "缶勧観帰犠挙狭駆茎経継欠剣検顕広鉱砕剤参惨糸辞舎寿",
    "渋粛将証乗畳嬢触寝図穂枢斉摂戦潜双荘装蔵続体台沢胆",
    "弾虫庁鎮点灯盗独弐覇売髪秘仏変弁豊翻黙与誉謡覧猟励",
    "齢労圧為隠衛塩殴穏画壊殻岳巻関顔偽旧峡暁勲恵蛍鶏県",
    "険献験効号済冊桟賛歯湿写収獣処称奨浄縄譲嘱慎粋随数",
    "静専践繊壮捜総臓堕帯滝担団遅昼聴逓転当稲読悩拝麦抜",
    "浜並弁舗褒万訳予揺来竜塁隷恋楼鯵鴬蛎撹竃潅諌頚砿蕊",
    "靭賎壷砺梼涛迩蝿桧侭薮篭弥麸柳塚渕船曽",
];
