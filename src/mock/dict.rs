//! Word lists used by the random generators.

pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER: &str = "0123456789";
pub const SYMBOL: &str = "!@#$%^&*()[]";

pub const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Charles", "Joseph",
    "Thomas", "Christopher", "Daniel", "Paul", "Mark", "Donald", "George", "Kenneth", "Steven",
    "Edward", "Brian", "Ronald", "Anthony", "Kevin", "Jason", "Matthew", "Gary", "Timothy",
    "Jose", "Larry", "Jeffrey", "Frank", "Scott", "Eric", "Mary", "Patricia", "Linda", "Barbara",
    "Elizabeth", "Jennifer", "Maria", "Susan", "Margaret", "Dorothy", "Lisa", "Nancy", "Karen",
    "Betty", "Helen", "Sandra", "Donna", "Carol", "Ruth", "Sharon", "Michelle", "Laura", "Sarah",
    "Kimberly", "Deborah", "Jessica", "Shirley", "Cynthia", "Angela", "Melissa", "Brenda", "Amy",
    "Anna",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson", "Martinez", "Anderson", "Taylor", "Thomas", "Hernandez", "Moore", "Martin",
    "Jackson", "Thompson", "White", "Lopez", "Lee", "Gonzalez", "Harris", "Clark", "Lewis",
    "Robinson", "Walker", "Perez", "Hall", "Young", "Allen",
];

pub const CHINESE_LAST_NAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "赵", "黄", "周", "吴", "徐", "孙", "胡", "朱", "高",
    "林", "何", "郭", "马", "罗", "梁", "宋", "郑", "谢", "韩", "唐", "冯", "于", "董", "萧",
    "程", "曹", "袁", "邓", "许", "傅", "沈", "曾", "彭", "吕", "苏", "卢", "蒋", "蔡", "贾",
    "丁", "魏", "薛", "叶", "阎", "余", "潘", "杜", "戴", "夏", "锺", "汪", "田", "任", "姜",
    "范", "方", "石", "姚", "谭", "廖", "邹", "熊", "金", "陆", "郝", "孔", "白", "崔", "康",
    "毛", "邱", "秦", "江", "史", "顾", "侯", "邵", "孟", "龙", "万", "段", "雷", "钱", "汤",
    "尹", "黎", "易", "常", "武", "乔", "贺", "赖", "龚", "文",
];

pub const CHINESE_FIRST_NAMES: &[&str] = &[
    "伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "军", "洋", "勇", "艳", "杰",
    "娟", "涛", "明", "超", "秀兰", "霞", "平", "刚", "桂英",
];

/// Common Chinese characters for `@cword` and friends.
pub const CHINESE_CHARS: &str = "的一是在不了有和人这中大为上个国我以要他时来用们生到作地于出就分对成会可主发年动同工也能下过子说产种面而方后多定行学法所民得经十三之进着等部度家电力里如水化高自二理起小物现实加量都两体制机当使点从业本去把性好应开它合还因由其些然前外天政四日那社义事平形相全表间样与关各重新线内数正心反你明看原又么利比或但质气第向道命此变条只没结解问意建月公无系军很情者最立代想已通并提直题党程展五果料象员革位入常文总次品式活设及管特件长求老头基资边流路级少图山统接知较将组见计别她手角期根论运农指几九区强放决西被干做必战先回则任取据处队南给色光门即保治北造百规热领七海口东导器压志世金增争济阶油思术极交受联什认六共权收证改清己美再采转更单风切打白教速花带安场身车例真务具万每目至达走积示议声报斗完类八离华名确才科张信马节话米整空元况今集温传土许步群广石记需段研界拉林律叫且究观越织装影算低持音众书布复容儿须际商非验连断深难近矿千周委素技备半办青省列习响约支般史感劳便团往酸历市克何除消构府称太准精值号率族维划选标写存候毛亲快效斯院查江型眼王按格养易置派层片始却专状育厂京识适属圆包火住调满县局照参红细引听该铁价严";

pub const TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "int", "mil", "cn", "io", "dev", "co", "info", "biz",
];

pub const PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "gopher", "mailto", "mid", "cid", "news", "nntp", "prospero",
    "telnet", "rlogin", "tn3270", "wais",
];

pub const REGIONS: &[&str] = &["东北", "华北", "华东", "华中", "华南", "西南", "西北"];

/// (province, cities)
pub const PROVINCES: &[(&str, &[&str])] = &[
    ("北京", &["北京市"]),
    ("上海", &["上海市"]),
    ("天津", &["天津市"]),
    ("重庆", &["重庆市"]),
    ("河北省", &["石家庄市", "唐山市", "秦皇岛市", "保定市"]),
    ("山西省", &["太原市", "大同市", "长治市"]),
    ("辽宁省", &["沈阳市", "大连市", "鞍山市"]),
    ("吉林省", &["长春市", "吉林市"]),
    ("黑龙江省", &["哈尔滨市", "齐齐哈尔市", "大庆市"]),
    ("江苏省", &["南京市", "无锡市", "苏州市", "徐州市"]),
    ("浙江省", &["杭州市", "宁波市", "温州市", "绍兴市"]),
    ("安徽省", &["合肥市", "芜湖市", "蚌埠市"]),
    ("福建省", &["福州市", "厦门市", "泉州市"]),
    ("江西省", &["南昌市", "九江市", "赣州市"]),
    ("山东省", &["济南市", "青岛市", "烟台市", "潍坊市"]),
    ("河南省", &["郑州市", "开封市", "洛阳市"]),
    ("湖北省", &["武汉市", "宜昌市", "襄阳市"]),
    ("湖南省", &["长沙市", "株洲市", "湘潭市"]),
    ("广东省", &["广州市", "深圳市", "珠海市", "佛山市", "东莞市"]),
    ("海南省", &["海口市", "三亚市"]),
    ("四川省", &["成都市", "绵阳市", "宜宾市"]),
    ("贵州省", &["贵阳市", "遵义市"]),
    ("云南省", &["昆明市", "大理市", "丽江市"]),
    ("陕西省", &["西安市", "宝鸡市", "咸阳市"]),
    ("甘肃省", &["兰州市", "天水市"]),
    ("青海省", &["西宁市"]),
    ("台湾", &["台北市", "高雄市"]),
    ("内蒙古自治区", &["呼和浩特市", "包头市"]),
    ("广西壮族自治区", &["南宁市", "桂林市", "柳州市"]),
    ("西藏自治区", &["拉萨市"]),
    ("宁夏回族自治区", &["银川市"]),
    ("新疆维吾尔自治区", &["乌鲁木齐市", "克拉玛依市"]),
    ("香港特别行政区", &["香港"]),
    ("澳门特别行政区", &["澳门"]),
];

pub const COUNTIES: &[&str] = &[
    "东城区", "西城区", "朝阳区", "海淀区", "浦东新区", "黄浦区", "南山区", "福田区",
    "天河区", "越秀区", "武侯区", "锦江区", "鼓楼区", "玄武区", "西湖区", "上城区",
];
