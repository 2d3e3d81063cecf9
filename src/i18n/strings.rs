use serde::Serialize;

/// Identifier for every user-facing message the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    Title,
    Subtitle,
    HowWorks,
    HowWorksText,
    Settings,
    SelectLanguage,
    Currency,
    MapInstr,
    LatLon,
    SelectLocWarn,
    PropDetails,
    Latitude,
    Longitude,
    TotalArea,
    Bedrooms,
    GarageCars,
    HouseAge,
    PredictBtn,
    ResultTitle,
    UnknownLocation,
    LocationLookupFailed,
    ErrorMissingField,
    ErrorOutOfRange,
    ErrorNotWholeNumber,
    ErrorPredictionFailed,
}

impl MessageKey {
    /// Every key, in display order.
    pub const ALL: [MessageKey; 25] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::HowWorks,
        MessageKey::HowWorksText,
        MessageKey::Settings,
        MessageKey::SelectLanguage,
        MessageKey::Currency,
        MessageKey::MapInstr,
        MessageKey::LatLon,
        MessageKey::SelectLocWarn,
        MessageKey::PropDetails,
        MessageKey::Latitude,
        MessageKey::Longitude,
        MessageKey::TotalArea,
        MessageKey::Bedrooms,
        MessageKey::GarageCars,
        MessageKey::HouseAge,
        MessageKey::PredictBtn,
        MessageKey::ResultTitle,
        MessageKey::UnknownLocation,
        MessageKey::LocationLookupFailed,
        MessageKey::ErrorMissingField,
        MessageKey::ErrorOutOfRange,
        MessageKey::ErrorNotWholeNumber,
        MessageKey::ErrorPredictionFailed,
    ];

    /// Stable identifier, used as the JSON key and as the last-resort fallback text.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Title => "title",
            MessageKey::Subtitle => "subtitle",
            MessageKey::HowWorks => "how_works",
            MessageKey::HowWorksText => "how_works_text",
            MessageKey::Settings => "settings",
            MessageKey::SelectLanguage => "select_language",
            MessageKey::Currency => "currency",
            MessageKey::MapInstr => "map_instr",
            MessageKey::LatLon => "lat_lon",
            MessageKey::SelectLocWarn => "select_loc_warn",
            MessageKey::PropDetails => "prop_details",
            MessageKey::Latitude => "latitude",
            MessageKey::Longitude => "longitude",
            MessageKey::TotalArea => "total_area",
            MessageKey::Bedrooms => "bedrooms",
            MessageKey::GarageCars => "garage_cars",
            MessageKey::HouseAge => "house_age",
            MessageKey::PredictBtn => "predict_btn",
            MessageKey::ResultTitle => "result_title",
            MessageKey::UnknownLocation => "unknown_location",
            MessageKey::LocationLookupFailed => "location_lookup_failed",
            MessageKey::ErrorMissingField => "error_missing_field",
            MessageKey::ErrorOutOfRange => "error_out_of_range",
            MessageKey::ErrorNotWholeNumber => "error_not_whole_number",
            MessageKey::ErrorPredictionFailed => "error_prediction_failed",
        }
    }
}

/// All localized user-facing strings for a language
///
/// An empty string marks a missing translation; lookups fall back to English.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Page Header ====================
    pub title: &'static str,
    pub subtitle: &'static str,
    pub how_works: &'static str,
    pub how_works_text: &'static str,

    // ==================== Sidebar ====================
    pub settings: &'static str,
    pub select_language: &'static str,
    pub currency: &'static str,

    // ==================== Map ====================
    pub map_instr: &'static str,
    pub lat_lon: &'static str,
    pub select_loc_warn: &'static str,

    // ==================== Property Form ====================
    pub prop_details: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub total_area: &'static str,
    pub bedrooms: &'static str,
    pub garage_cars: &'static str,
    pub house_age: &'static str,
    pub predict_btn: &'static str,

    // ==================== Results ====================
    pub result_title: &'static str,
    pub unknown_location: &'static str,
    pub location_lookup_failed: &'static str,

    // ==================== Errors ====================
    /// Placeholders: {field}
    pub error_missing_field: &'static str,

    /// Placeholders: {field}, {min}, {max}
    pub error_out_of_range: &'static str,

    /// Placeholders: {field}
    pub error_not_whole_number: &'static str,

    pub error_prediction_failed: &'static str,
}

impl LanguageStrings {
    /// Raw entry for a key; may be empty when the translation is missing.
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::Title => self.title,
            MessageKey::Subtitle => self.subtitle,
            MessageKey::HowWorks => self.how_works,
            MessageKey::HowWorksText => self.how_works_text,
            MessageKey::Settings => self.settings,
            MessageKey::SelectLanguage => self.select_language,
            MessageKey::Currency => self.currency,
            MessageKey::MapInstr => self.map_instr,
            MessageKey::LatLon => self.lat_lon,
            MessageKey::SelectLocWarn => self.select_loc_warn,
            MessageKey::PropDetails => self.prop_details,
            MessageKey::Latitude => self.latitude,
            MessageKey::Longitude => self.longitude,
            MessageKey::TotalArea => self.total_area,
            MessageKey::Bedrooms => self.bedrooms,
            MessageKey::GarageCars => self.garage_cars,
            MessageKey::HouseAge => self.house_age,
            MessageKey::PredictBtn => self.predict_btn,
            MessageKey::ResultTitle => self.result_title,
            MessageKey::UnknownLocation => self.unknown_location,
            MessageKey::LocationLookupFailed => self.location_lookup_failed,
            MessageKey::ErrorMissingField => self.error_missing_field,
            MessageKey::ErrorOutOfRange => self.error_out_of_range,
            MessageKey::ErrorNotWholeNumber => self.error_not_whole_number,
            MessageKey::ErrorPredictionFailed => self.error_prediction_failed,
        }
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    title: "Global Housing AI",
    subtitle: "Estimate residential property prices anywhere in the world",
    how_works: "How it works",
    how_works_text: "Click a location on the map, describe the property, and press Predict. \
A gradient-boosted model combines the location value with the structural features to estimate the price.",

    settings: "Settings",
    select_language: "Select Language",
    currency: "Currency",

    map_instr: "Select a location on the map",
    lat_lon: "Latitude, Longitude",
    select_loc_warn: "Please click on the map to select a location first.",

    prop_details: "Property Details",
    latitude: "Latitude",
    longitude: "Longitude",
    total_area: "Total Area (sq ft)",
    bedrooms: "Bedrooms",
    garage_cars: "Garage Capacity (cars)",
    house_age: "House Age (years)",
    predict_btn: "Predict Price",

    result_title: "Estimated Price",
    unknown_location: "Unknown Location",
    location_lookup_failed: "Location Lookup Failed",

    error_missing_field: "{field} is required.",
    error_out_of_range: "{field} must be between {min} and {max}.",
    error_not_whole_number: "{field} must be a whole number.",
    error_prediction_failed: "The price could not be estimated. Please try again.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    title: "IA Global de Vivienda",
    subtitle: "Estima el precio de propiedades residenciales en cualquier parte del mundo",
    how_works: "Cómo funciona",
    how_works_text: "Haz clic en una ubicación del mapa, describe la propiedad y pulsa Predecir. \
Un modelo de gradient boosting combina el valor de la ubicación con las características estructurales para estimar el precio.",

    settings: "Configuración",
    select_language: "Seleccionar idioma",
    currency: "Moneda",

    map_instr: "Selecciona una ubicación en el mapa",
    lat_lon: "Latitud, Longitud",
    select_loc_warn: "Primero haz clic en el mapa para seleccionar una ubicación.",

    prop_details: "Detalles de la propiedad",
    latitude: "Latitud",
    longitude: "Longitud",
    total_area: "Superficie total (pies²)",
    bedrooms: "Dormitorios",
    garage_cars: "Capacidad del garaje (autos)",
    house_age: "Antigüedad (años)",
    predict_btn: "Predecir precio",

    result_title: "Precio estimado",
    unknown_location: "Ubicación desconocida",
    location_lookup_failed: "No se pudo obtener la ubicación",

    error_missing_field: "{field} es obligatorio.",
    error_out_of_range: "{field} debe estar entre {min} y {max}.",
    error_not_whole_number: "{field} debe ser un número entero.",
    error_prediction_failed: "No se pudo estimar el precio. Inténtalo de nuevo.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    title: "IA Immobilière Mondiale",
    subtitle: "Estimez le prix des biens résidentiels partout dans le monde",
    how_works: "Comment ça marche",
    how_works_text: "Cliquez sur un lieu de la carte, décrivez le bien et appuyez sur Prédire. \
Un modèle de gradient boosting combine la valeur de l'emplacement et les caractéristiques du bâtiment pour estimer le prix.",

    settings: "Paramètres",
    select_language: "Choisir la langue",
    currency: "Devise",

    map_instr: "Sélectionnez un lieu sur la carte",
    lat_lon: "Latitude, Longitude",
    select_loc_warn: "Veuillez d'abord cliquer sur la carte pour choisir un lieu.",

    prop_details: "Détails du bien",
    latitude: "Latitude",
    longitude: "Longitude",
    total_area: "Surface totale (pi²)",
    bedrooms: "Chambres",
    garage_cars: "Capacité du garage (voitures)",
    house_age: "Âge du bâtiment (ans)",
    predict_btn: "Prédire le prix",

    result_title: "Prix estimé",
    unknown_location: "Lieu inconnu",
    location_lookup_failed: "Échec de la recherche du lieu",

    error_missing_field: "{field} est obligatoire.",
    error_out_of_range: "{field} doit être compris entre {min} et {max}.",
    error_not_whole_number: "{field} doit être un nombre entier.",
    error_prediction_failed: "Le prix n'a pas pu être estimé. Veuillez réessayer.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    title: "Globale Immobilien-KI",
    subtitle: "Schätzen Sie Wohnimmobilienpreise überall auf der Welt",
    how_works: "So funktioniert es",
    how_works_text: "Klicken Sie auf einen Ort auf der Karte, beschreiben Sie die Immobilie und drücken Sie auf Vorhersagen. \
Ein Gradient-Boosting-Modell kombiniert den Lagewert mit den baulichen Merkmalen, um den Preis zu schätzen.",

    settings: "Einstellungen",
    select_language: "Sprache wählen",
    currency: "Währung",

    map_instr: "Wählen Sie einen Ort auf der Karte",
    lat_lon: "Breitengrad, Längengrad",
    select_loc_warn: "Bitte klicken Sie zuerst auf die Karte, um einen Ort auszuwählen.",

    prop_details: "Objektdetails",
    latitude: "Breitengrad",
    longitude: "Längengrad",
    total_area: "Gesamtfläche (sq ft)",
    bedrooms: "Schlafzimmer",
    garage_cars: "Garagenplätze (Autos)",
    house_age: "Alter des Hauses (Jahre)",
    predict_btn: "Preis vorhersagen",

    result_title: "Geschätzter Preis",
    unknown_location: "Unbekannter Ort",
    location_lookup_failed: "Ortssuche fehlgeschlagen",

    error_missing_field: "{field} ist erforderlich.",
    error_out_of_range: "{field} muss zwischen {min} und {max} liegen.",
    error_not_whole_number: "{field} muss eine ganze Zahl sein.",
    error_prediction_failed: "Der Preis konnte nicht geschätzt werden. Bitte versuchen Sie es erneut.",
};

// ==================== Italian Strings ====================

pub const ITALIAN_STRINGS: LanguageStrings = LanguageStrings {
    title: "IA Immobiliare Globale",
    subtitle: "Stima il prezzo degli immobili residenziali in tutto il mondo",
    how_works: "Come funziona",
    how_works_text: "Fai clic su un punto della mappa, descrivi l'immobile e premi Prevedi. \
Un modello di gradient boosting combina il valore della posizione con le caratteristiche strutturali per stimare il prezzo.",

    settings: "Impostazioni",
    select_language: "Seleziona lingua",
    currency: "Valuta",

    map_instr: "Seleziona un luogo sulla mappa",
    lat_lon: "Latitudine, Longitudine",
    select_loc_warn: "Fai prima clic sulla mappa per selezionare un luogo.",

    prop_details: "Dettagli dell'immobile",
    latitude: "Latitudine",
    longitude: "Longitudine",
    total_area: "Superficie totale (piedi²)",
    bedrooms: "Camere da letto",
    garage_cars: "Posti auto in garage",
    house_age: "Età della casa (anni)",
    predict_btn: "Prevedi prezzo",

    result_title: "Prezzo stimato",
    unknown_location: "Luogo sconosciuto",
    location_lookup_failed: "Ricerca del luogo non riuscita",

    error_missing_field: "{field} è obbligatorio.",
    error_out_of_range: "{field} deve essere compreso tra {min} e {max}.",
    error_not_whole_number: "{field} deve essere un numero intero.",
    error_prediction_failed: "Impossibile stimare il prezzo. Riprova.",
};

// ==================== Portuguese Strings ====================

pub const PORTUGUESE_STRINGS: LanguageStrings = LanguageStrings {
    title: "IA Imobiliária Global",
    subtitle: "Estime o preço de imóveis residenciais em qualquer lugar do mundo",
    how_works: "Como funciona",
    how_works_text: "Clique em um local no mapa, descreva o imóvel e pressione Prever. \
Um modelo de gradient boosting combina o valor da localização com as características estruturais para estimar o preço.",

    settings: "Configurações",
    select_language: "Selecionar idioma",
    currency: "Moeda",

    map_instr: "Selecione um local no mapa",
    lat_lon: "Latitude, Longitude",
    select_loc_warn: "Clique primeiro no mapa para selecionar um local.",

    prop_details: "Detalhes do imóvel",
    latitude: "Latitude",
    longitude: "Longitude",
    total_area: "Área total (pés²)",
    bedrooms: "Quartos",
    garage_cars: "Vagas na garagem",
    house_age: "Idade do imóvel (anos)",
    predict_btn: "Prever preço",

    result_title: "Preço estimado",
    unknown_location: "Local desconhecido",
    location_lookup_failed: "Falha ao buscar o local",

    error_missing_field: "{field} é obrigatório.",
    error_out_of_range: "{field} deve estar entre {min} e {max}.",
    error_not_whole_number: "{field} deve ser um número inteiro.",
    error_prediction_failed: "Não foi possível estimar o preço. Tente novamente.",
};

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LanguageStrings = LanguageStrings {
    title: "Глобальный ИИ недвижимости",
    subtitle: "Оценка стоимости жилой недвижимости в любой точке мира",
    how_works: "Как это работает",
    how_works_text: "Нажмите на место на карте, опишите объект и нажмите «Рассчитать». \
Модель градиентного бустинга объединяет стоимость местоположения с характеристиками здания, чтобы оценить цену.",

    settings: "Настройки",
    select_language: "Выберите язык",
    currency: "Валюта",

    map_instr: "Выберите место на карте",
    lat_lon: "Широта, Долгота",
    select_loc_warn: "Сначала нажмите на карту, чтобы выбрать место.",

    prop_details: "Характеристики объекта",
    latitude: "Широта",
    longitude: "Долгота",
    total_area: "Общая площадь (кв. футы)",
    bedrooms: "Спальни",
    garage_cars: "Мест в гараже",
    house_age: "Возраст дома (лет)",
    predict_btn: "Рассчитать цену",

    result_title: "Оценочная цена",
    unknown_location: "Неизвестное место",
    location_lookup_failed: "Не удалось определить место",

    error_missing_field: "Поле «{field}» обязательно.",
    error_out_of_range: "{field}: значение должно быть от {min} до {max}.",
    error_not_whole_number: "{field}: требуется целое число.",
    error_prediction_failed: "Не удалось оценить цену. Попробуйте ещё раз.",
};

// ==================== Chinese Strings ====================

pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    title: "全球房价AI",
    subtitle: "估算全球任意地点的住宅价格",
    how_works: "工作原理",
    how_works_text: "在地图上点击一个位置，填写房屋信息，然后点击预测。梯度提升模型会结合位置价值与房屋结构特征来估算价格。",

    settings: "设置",
    select_language: "选择语言",
    currency: "货币",

    map_instr: "在地图上选择位置",
    lat_lon: "纬度, 经度",
    select_loc_warn: "请先点击地图选择一个位置。",

    prop_details: "房屋详情",
    latitude: "纬度",
    longitude: "经度",
    total_area: "总面积（平方英尺）",
    bedrooms: "卧室数量",
    garage_cars: "车库容量（辆）",
    house_age: "房龄（年）",
    predict_btn: "预测价格",

    result_title: "预估价格",
    unknown_location: "未知位置",
    location_lookup_failed: "位置查询失败",

    error_missing_field: "{field}为必填项。",
    error_out_of_range: "{field}必须介于{min}和{max}之间。",
    error_not_whole_number: "{field}必须为整数。",
    error_prediction_failed: "无法估算价格，请重试。",
};

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: LanguageStrings = LanguageStrings {
    title: "グローバル住宅AI",
    subtitle: "世界中の住宅価格を推定します",
    how_works: "仕組み",
    how_works_text: "地図上の場所をクリックし、物件の情報を入力して「予測」を押してください。\
勾配ブースティングモデルが立地の価値と建物の特徴を組み合わせて価格を推定します。",

    settings: "設定",
    select_language: "言語を選択",
    currency: "通貨",

    map_instr: "地図で場所を選択してください",
    lat_lon: "緯度, 経度",
    select_loc_warn: "まず地図をクリックして場所を選択してください。",

    prop_details: "物件の詳細",
    latitude: "緯度",
    longitude: "経度",
    total_area: "延床面積（平方フィート）",
    bedrooms: "寝室数",
    garage_cars: "ガレージ収容台数",
    house_age: "築年数（年）",
    predict_btn: "価格を予測",

    result_title: "推定価格",
    unknown_location: "不明な場所",
    location_lookup_failed: "場所の検索に失敗しました",

    error_missing_field: "{field}は必須です。",
    error_out_of_range: "{field}は{min}から{max}の範囲で入力してください。",
    error_not_whole_number: "{field}は整数で入力してください。",
    error_prediction_failed: "価格を推定できませんでした。もう一度お試しください。",
};

// ==================== Korean Strings ====================

pub const KOREAN_STRINGS: LanguageStrings = LanguageStrings {
    title: "글로벌 주택 AI",
    subtitle: "전 세계 어디서나 주택 가격을 추정합니다",
    how_works: "작동 방식",
    how_works_text: "지도에서 위치를 클릭하고 주택 정보를 입력한 뒤 예측을 누르세요. \
그래디언트 부스팅 모델이 위치 가치와 건물 특성을 결합해 가격을 추정합니다.",

    settings: "설정",
    select_language: "언어 선택",
    currency: "통화",

    map_instr: "지도에서 위치를 선택하세요",
    lat_lon: "위도, 경도",
    select_loc_warn: "먼저 지도를 클릭하여 위치를 선택하세요.",

    prop_details: "주택 정보",
    latitude: "위도",
    longitude: "경도",
    total_area: "총 면적 (평방피트)",
    bedrooms: "침실 수",
    garage_cars: "차고 수용 대수",
    house_age: "주택 연식 (년)",
    predict_btn: "가격 예측",

    result_title: "예상 가격",
    unknown_location: "알 수 없는 위치",
    location_lookup_failed: "위치 조회 실패",

    error_missing_field: "{field} 항목은 필수입니다.",
    error_out_of_range: "{field} 값은 {min}에서 {max} 사이여야 합니다.",
    error_not_whole_number: "{field} 값은 정수여야 합니다.",
    error_prediction_failed: "가격을 추정할 수 없습니다. 다시 시도하세요.",
};

// ==================== Hindi Strings ====================

pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    title: "ग्लोबल हाउसिंग एआई",
    subtitle: "दुनिया में कहीं भी आवासीय संपत्ति की कीमत का अनुमान लगाएं",
    how_works: "यह कैसे काम करता है",
    how_works_text: "मानचित्र पर किसी स्थान पर क्लिक करें, संपत्ति का विवरण दें और अनुमान लगाएं दबाएं। \
एक ग्रेडिएंट बूस्टिंग मॉडल स्थान के मूल्य और संरचनात्मक विशेषताओं को मिलाकर कीमत का अनुमान लगाता है।",

    settings: "सेटिंग्स",
    select_language: "भाषा चुनें",
    currency: "मुद्रा",

    map_instr: "मानचित्र पर स्थान चुनें",
    lat_lon: "अक्षांश, देशांतर",
    select_loc_warn: "कृपया पहले मानचित्र पर क्लिक करके स्थान चुनें।",

    prop_details: "संपत्ति का विवरण",
    latitude: "अक्षांश",
    longitude: "देशांतर",
    total_area: "कुल क्षेत्रफल (वर्ग फुट)",
    bedrooms: "शयनकक्ष",
    garage_cars: "गैराज क्षमता (कारें)",
    house_age: "मकान की आयु (वर्ष)",
    predict_btn: "कीमत का अनुमान लगाएं",

    result_title: "अनुमानित कीमत",
    unknown_location: "अज्ञात स्थान",
    location_lookup_failed: "स्थान खोज विफल",

    error_missing_field: "{field} आवश्यक है।",
    error_out_of_range: "{field} {min} और {max} के बीच होना चाहिए।",
    error_not_whole_number: "{field} एक पूर्ण संख्या होनी चाहिए।",
    error_prediction_failed: "कीमत का अनुमान नहीं लगाया जा सका। कृपया पुनः प्रयास करें।",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    title: "الذكاء الاصطناعي العالمي للإسكان",
    subtitle: "قدّر أسعار العقارات السكنية في أي مكان في العالم",
    how_works: "كيف يعمل",
    how_works_text: "انقر على موقع في الخريطة، وصِف العقار، ثم اضغط على توقّع. \
يجمع نموذج التعزيز المتدرج بين قيمة الموقع والخصائص الإنشائية لتقدير السعر.",

    settings: "الإعدادات",
    select_language: "اختر اللغة",
    currency: "العملة",

    map_instr: "اختر موقعًا على الخريطة",
    lat_lon: "خط العرض، خط الطول",
    select_loc_warn: "يرجى النقر على الخريطة لاختيار موقع أولاً.",

    prop_details: "تفاصيل العقار",
    latitude: "خط العرض",
    longitude: "خط الطول",
    total_area: "المساحة الإجمالية (قدم مربع)",
    bedrooms: "غرف النوم",
    garage_cars: "سعة المرآب (سيارات)",
    house_age: "عمر المنزل (سنوات)",
    predict_btn: "توقّع السعر",

    result_title: "السعر المقدّر",
    unknown_location: "موقع غير معروف",
    location_lookup_failed: "فشل البحث عن الموقع",

    error_missing_field: "{field} مطلوب.",
    error_out_of_range: "يجب أن يكون {field} بين {min} و{max}.",
    error_not_whole_number: "يجب أن يكون {field} عددًا صحيحًا.",
    error_prediction_failed: "تعذّر تقدير السعر. يرجى المحاولة مرة أخرى.",
};

// ==================== Turkish Strings ====================

pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    title: "Küresel Konut Yapay Zekâsı",
    subtitle: "Dünyanın her yerinde konut fiyatlarını tahmin edin",
    how_works: "Nasıl çalışır",
    how_works_text: "Haritada bir konuma tıklayın, mülkü tanımlayın ve Tahmin Et'e basın. \
Gradyan artırma modeli, konum değerini yapısal özelliklerle birleştirerek fiyatı tahmin eder.",

    settings: "Ayarlar",
    select_language: "Dil seçin",
    currency: "Para birimi",

    map_instr: "Haritada bir konum seçin",
    lat_lon: "Enlem, Boylam",
    select_loc_warn: "Lütfen önce haritaya tıklayarak bir konum seçin.",

    prop_details: "Mülk Detayları",
    latitude: "Enlem",
    longitude: "Boylam",
    total_area: "Toplam Alan (ft²)",
    bedrooms: "Yatak Odası",
    garage_cars: "Garaj Kapasitesi (araç)",
    house_age: "Bina Yaşı (yıl)",
    predict_btn: "Fiyatı Tahmin Et",

    result_title: "Tahmini Fiyat",
    unknown_location: "Bilinmeyen Konum",
    location_lookup_failed: "Konum Sorgusu Başarısız",

    error_missing_field: "{field} zorunludur.",
    error_out_of_range: "{field} {min} ile {max} arasında olmalıdır.",
    error_not_whole_number: "{field} tam sayı olmalıdır.",
    error_prediction_failed: "Fiyat tahmin edilemedi. Lütfen tekrar deneyin.",
};

// ==================== Bengali Strings ====================

pub const BENGALI_STRINGS: LanguageStrings = LanguageStrings {
    title: "গ্লোবাল হাউজিং এআই",
    subtitle: "বিশ্বের যেকোনো স্থানে আবাসিক সম্পত্তির দাম অনুমান করুন",
    how_works: "এটি কীভাবে কাজ করে",
    how_works_text: "মানচিত্রে একটি স্থানে ক্লিক করুন, সম্পত্তির বিবরণ দিন এবং অনুমান করুন চাপুন। \
একটি গ্রেডিয়েন্ট বুস্টিং মডেল অবস্থানের মূল্য ও কাঠামোগত বৈশিষ্ট্য মিলিয়ে দাম অনুমান করে।",

    settings: "সেটিংস",
    select_language: "ভাষা নির্বাচন করুন",
    currency: "মুদ্রা",

    map_instr: "মানচিত্রে একটি স্থান নির্বাচন করুন",
    lat_lon: "অক্ষাংশ, দ্রাঘিমাংশ",
    select_loc_warn: "অনুগ্রহ করে প্রথমে মানচিত্রে ক্লিক করে একটি স্থান নির্বাচন করুন।",

    prop_details: "সম্পত্তির বিবরণ",
    latitude: "অক্ষাংশ",
    longitude: "দ্রাঘিমাংশ",
    total_area: "মোট আয়তন (বর্গফুট)",
    bedrooms: "শয়নকক্ষ",
    garage_cars: "গ্যারেজ ধারণক্ষমতা (গাড়ি)",
    house_age: "বাড়ির বয়স (বছর)",
    predict_btn: "দাম অনুমান করুন",

    result_title: "আনুমানিক দাম",
    unknown_location: "অজানা স্থান",
    location_lookup_failed: "স্থান অনুসন্ধান ব্যর্থ হয়েছে",

    error_missing_field: "{field} আবশ্যক।",
    error_out_of_range: "{field} অবশ্যই {min} থেকে {max} এর মধ্যে হতে হবে।",
    error_not_whole_number: "{field} অবশ্যই একটি পূর্ণসংখ্যা হতে হবে।",
    error_prediction_failed: "দাম অনুমান করা যায়নি। আবার চেষ্টা করুন।",
};

// ==================== Indonesian Strings ====================

pub const INDONESIAN_STRINGS: LanguageStrings = LanguageStrings {
    title: "AI Perumahan Global",
    subtitle: "Perkirakan harga properti hunian di mana saja di dunia",
    how_works: "Cara kerjanya",
    how_works_text: "Klik lokasi di peta, jelaskan propertinya, lalu tekan Prediksi. \
Model gradient boosting menggabungkan nilai lokasi dengan fitur struktural untuk memperkirakan harga.",

    settings: "Pengaturan",
    select_language: "Pilih bahasa",
    currency: "Mata uang",

    map_instr: "Pilih lokasi di peta",
    lat_lon: "Lintang, Bujur",
    select_loc_warn: "Silakan klik peta terlebih dahulu untuk memilih lokasi.",

    prop_details: "Detail Properti",
    latitude: "Lintang",
    longitude: "Bujur",
    total_area: "Luas Total (kaki²)",
    bedrooms: "Kamar Tidur",
    garage_cars: "Kapasitas Garasi (mobil)",
    house_age: "Usia Rumah (tahun)",
    predict_btn: "Prediksi Harga",

    result_title: "Perkiraan Harga",
    unknown_location: "Lokasi Tidak Dikenal",
    location_lookup_failed: "Pencarian Lokasi Gagal",

    error_missing_field: "{field} wajib diisi.",
    error_out_of_range: "{field} harus antara {min} dan {max}.",
    error_not_whole_number: "{field} harus berupa bilangan bulat.",
    error_prediction_failed: "Harga tidak dapat diperkirakan. Silakan coba lagi.",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Key Tests ====================

    #[test]
    fn test_all_keys_unique() {
        let mut names: Vec<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_key_serializes_as_snake_case() {
        let json = serde_json::to_string(&MessageKey::SelectLocWarn).unwrap();
        assert_eq!(json, "\"select_loc_warn\"");
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_strings_complete() {
        for key in MessageKey::ALL {
            assert!(
                !ENGLISH_STRINGS.get(key).is_empty(),
                "English entry for {} is empty",
                key.as_str()
            );
        }
    }

    #[test]
    fn test_english_error_placeholders() {
        assert!(ENGLISH_STRINGS.error_missing_field.contains("{field}"));
        assert!(ENGLISH_STRINGS.error_out_of_range.contains("{min}"));
        assert!(ENGLISH_STRINGS.error_out_of_range.contains("{max}"));
        assert!(ENGLISH_STRINGS.error_not_whole_number.contains("{field}"));
    }

    // ==================== Spanish Strings Tests ====================

    #[test]
    fn test_spanish_result_title() {
        assert_eq!(SPANISH_STRINGS.get(MessageKey::ResultTitle), "Precio estimado");
    }

    #[test]
    fn test_spanish_out_of_range_placeholders() {
        assert!(SPANISH_STRINGS.error_out_of_range.contains("{field}"));
        assert!(SPANISH_STRINGS.error_out_of_range.contains("{min}"));
        assert!(SPANISH_STRINGS.error_out_of_range.contains("{max}"));
    }

    #[test]
    fn test_get_maps_field_labels() {
        assert_eq!(ENGLISH_STRINGS.get(MessageKey::Latitude), "Latitude");
        assert_eq!(GERMAN_STRINGS.get(MessageKey::Latitude), "Breitengrad");
        assert_eq!(JAPANESE_STRINGS.get(MessageKey::Bedrooms), "寝室数");
    }
}
